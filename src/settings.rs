use std::{fmt, str::FromStr};

use crate::CamError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Specifies where captured pictures end up.
pub enum TransferMode {
    /// Transferred to the computer only.
    Pc,
    /// Kept on the camera card only.
    Camera,
    /// Transferred to the computer and kept on the card.
    Both,
}

impl TransferMode {
    /// Value sent to digiCamControl for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "Save_to_PC_only",
            Self::Camera => "Save_to_camera_only",
            Self::Both => "Save_to_PC_and_camera",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferMode {
    type Err = CamError;

    /// Accepts both the underscored form and the spaced form the application prints.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace(' ', "_").as_str() {
            "Save_to_PC_only" => Ok(Self::Pc),
            "Save_to_camera_only" => Ok(Self::Camera),
            "Save_to_PC_and_camera" => Ok(Self::Both),
            _ => Err(CamError::InvalidValue {
                property: Property::Transfer.name(),
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Represents a named setting of the camera or of the current session.
pub enum Property {
    ShutterSpeed,
    Iso,
    ExposureCompensation,
    Aperture,
    FocusMode,
    WhiteBalance,
    Mode,
    Compression,
    SessionName,
    SessionFolder,
    SessionCounter,
    FileNameTemplate,
    DeleteFileAfterTransfer,
    Transfer,
    LastCaptured,
}

impl Property {
    pub const ALL: [Property; 15] = [
        Self::ShutterSpeed,
        Self::Iso,
        Self::ExposureCompensation,
        Self::Aperture,
        Self::FocusMode,
        Self::WhiteBalance,
        Self::Mode,
        Self::Compression,
        Self::SessionName,
        Self::SessionFolder,
        Self::SessionCounter,
        Self::FileNameTemplate,
        Self::DeleteFileAfterTransfer,
        Self::Transfer,
        Self::LastCaptured,
    ];

    /// Name of the property in remote commands.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ShutterSpeed => "shutterspeed",
            Self::Iso => "iso",
            Self::ExposureCompensation => "exposurecompensation",
            Self::Aperture => "aperture",
            Self::FocusMode => "focusmode",
            Self::WhiteBalance => "whitebalance",
            Self::Mode => "mode",
            Self::Compression => "compressionsetting",
            Self::SessionName => "session.name",
            Self::SessionFolder => "session.folder",
            Self::SessionCounter => "session.counter",
            Self::FileNameTemplate => "session.filenametemplate",
            Self::DeleteFileAfterTransfer => "session.deletefileaftertransfer",
            Self::Transfer => "transfer",
            Self::LastCaptured => "lastcaptured",
        }
    }

    /// Whether the camera can enumerate the accepted values (`list <name>`).
    pub fn is_listable(&self) -> bool {
        matches!(
            self,
            Self::ShutterSpeed
                | Self::Iso
                | Self::ExposureCompensation
                | Self::Aperture
                | Self::FocusMode
                | Self::WhiteBalance
                | Self::Mode
                | Self::Compression
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Command types understood by the remote utility.
pub enum Verb {
    Get,
    Set,
    List,
    Capture,
    Do,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::List => "list",
            Self::Capture => "capture",
            Self::Do => "do",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a boolean the way digiCamControl prints and accepts it.
pub(crate) fn bool_value(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

pub(crate) fn parse_bool(property: Property, value: &str) -> Result<bool, CamError> {
    match value.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(CamError::InvalidValue {
            property: property.name(),
            value: other.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_mode_parses_spaced_form() {
        let mode: TransferMode = "Save to PC and camera".parse().unwrap();
        assert_eq!(mode, TransferMode::Both);

        let mode: TransferMode = "Save_to_camera_only".parse().unwrap();
        assert_eq!(mode, TransferMode::Camera);
    }

    #[test]
    fn transfer_mode_rejects_unknown() {
        let err = "Save to the cloud".parse::<TransferMode>().unwrap_err();
        assert!(matches!(err, CamError::InvalidValue { property: "transfer", .. }));
    }

    #[test]
    fn only_exposure_settings_are_listable() {
        let listable: Vec<_> = Property::ALL
            .iter()
            .filter(|p| p.is_listable())
            .map(Property::name)
            .collect();

        assert_eq!(
            listable,
            [
                "shutterspeed",
                "iso",
                "exposurecompensation",
                "aperture",
                "focusmode",
                "whitebalance",
                "mode",
                "compressionsetting"
            ]
        );
    }

    #[test]
    fn bools_use_dotnet_casing() {
        assert_eq!(bool_value(true), "True");
        assert!(!parse_bool(Property::DeleteFileAfterTransfer, "false").unwrap());
        assert!(parse_bool(Property::DeleteFileAfterTransfer, "yes").is_err());
    }
}
