//! Devices recognized by user-agent sniffing.

use crate::config::user_agents;

/// Device family selected by name for [`crate::is_mobile_device`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Device {
    Android,
    WebOs,
    IPhone,
    IPad,
    /// iPhone or iPad
    Ios,
    /// iPhone or iPad running iOS 7
    Ios7,
    BlackBerry,
    /// Internet Explorer Mobile
    IeMobile,
    OperaMini,
    /// Any of the known mobile families
    #[default]
    Any,
}

impl Device {
    /// Every device, in matching-table order.
    pub const ALL: [Device; 10] = [
        Device::Android,
        Device::WebOs,
        Device::IPhone,
        Device::IPad,
        Device::Ios,
        Device::Ios7,
        Device::BlackBerry,
        Device::IeMobile,
        Device::OperaMini,
        Device::Any,
    ];

    /// Look up a device by name, ignoring case.
    ///
    /// Recognized names: `android`, `webos`, `iphone`, `ipad`, `ios`,
    /// `ios7`, `blackberry`, `ie`, `opera`. Anything else means [`Device::Any`].
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "android" => Self::Android,
            "webos" => Self::WebOs,
            "iphone" => Self::IPhone,
            "ipad" => Self::IPad,
            "ios" => Self::Ios,
            "ios7" => Self::Ios7,
            "blackberry" => Self::BlackBerry,
            "ie" => Self::IeMobile,
            "opera" => Self::OperaMini,
            _ => Self::Any,
        }
    }

    /// User-agent pattern for this device (matched case-insensitively).
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Android => user_agents::ANDROID,
            Self::WebOs => user_agents::WEBOS,
            Self::IPhone => user_agents::IPHONE,
            Self::IPad => user_agents::IPAD,
            Self::Ios => user_agents::IOS,
            Self::Ios7 => user_agents::IOS7,
            Self::BlackBerry => user_agents::BLACKBERRY,
            Self::IeMobile => user_agents::IE_MOBILE,
            Self::OperaMini => user_agents::OPERA_MINI,
            Self::Any => user_agents::ANY_MOBILE,
        }
    }

    /// Position in [`Device::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl From<Option<&str>> for Device {
    fn from(name: Option<&str>) -> Self {
        name.map(Self::from_name).unwrap_or_default()
    }
}
