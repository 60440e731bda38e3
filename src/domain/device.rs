use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// A resolved hardware model.
///
/// The set of known models is fixed at build time: the iOS table by default, the tvOS
/// table when the crate is built with `cfg(tv_platform)`.
///
/// Two devices are equal when their descriptions are equal. Equality does not look at the
/// variant tag, so two tags carrying the same display string compare equal.
#[derive(Debug, Clone)]
pub enum Device {
    #[cfg(not(tv_platform))]
    IPodTouch5,
    #[cfg(not(tv_platform))]
    IPodTouch6,

    #[cfg(not(tv_platform))]
    IPhone4,
    #[cfg(not(tv_platform))]
    IPhone4S,
    #[cfg(not(tv_platform))]
    IPhone5,
    #[cfg(not(tv_platform))]
    IPhone5C,
    #[cfg(not(tv_platform))]
    IPhone5S,
    #[cfg(not(tv_platform))]
    IPhone6,
    #[cfg(not(tv_platform))]
    IPhone6Plus,
    #[cfg(not(tv_platform))]
    IPhone6S,
    #[cfg(not(tv_platform))]
    IPhone6SPlus,

    #[cfg(not(tv_platform))]
    IPad2,
    #[cfg(not(tv_platform))]
    IPad3,
    #[cfg(not(tv_platform))]
    IPad4,
    #[cfg(not(tv_platform))]
    IPadAir,
    #[cfg(not(tv_platform))]
    IPadAir2,
    #[cfg(not(tv_platform))]
    IPadMini,
    #[cfg(not(tv_platform))]
    IPadMini2,
    #[cfg(not(tv_platform))]
    IPadMini3,
    #[cfg(not(tv_platform))]
    IPadMini4,
    #[cfg(not(tv_platform))]
    IPadPro,

    #[cfg(tv_platform)]
    AppleTv4,

    /// A known model running inside the simulator. The inner device is never a `Simulator`.
    Simulator(Box<Device>),
    /// An identifier missing from the model table, kept verbatim.
    UnknownDevice(String),
}

/// Device family, independent of simulator wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFamily {
    Pod,
    Phone,
    Pad,
    Tv,
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceFamily::Pod => write!(f, "iPod touch"),
            DeviceFamily::Phone => write!(f, "iPhone"),
            DeviceFamily::Pad => write!(f, "iPad"),
            DeviceFamily::Tv => write!(f, "Apple TV"),
        }
    }
}

/// The style of interface to use on a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserInterfaceIdiom {
    /// Designed for iPhone and iPod touch.
    Phone,
    /// Designed for iPad.
    Pad,
    /// Designed for TV.
    Tv,
    /// No family could be determined.
    Unspecified,
}

impl UserInterfaceIdiom {
    /// Derive the idiom from a resolved device.
    pub fn for_device(device: &Device) -> Self {
        match device.family() {
            Some(DeviceFamily::Pod | DeviceFamily::Phone) => UserInterfaceIdiom::Phone,
            Some(DeviceFamily::Pad) => UserInterfaceIdiom::Pad,
            Some(DeviceFamily::Tv) => UserInterfaceIdiom::Tv,
            None => UserInterfaceIdiom::Unspecified,
        }
    }
}

impl fmt::Display for UserInterfaceIdiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserInterfaceIdiom::Phone => write!(f, "phone"),
            UserInterfaceIdiom::Pad => write!(f, "pad"),
            UserInterfaceIdiom::Tv => write!(f, "tv"),
            UserInterfaceIdiom::Unspecified => write!(f, "unspecified"),
        }
    }
}

#[cfg(not(tv_platform))]
impl Device {
    /// All iPods.
    pub const ALL_PODS: &'static [Device] = &[Device::IPodTouch5, Device::IPodTouch6];

    /// All iPhones. The iPhone 5c is not listed, so it belongs to no family.
    pub const ALL_PHONES: &'static [Device] = &[
        Device::IPhone4,
        Device::IPhone4S,
        Device::IPhone5,
        Device::IPhone5S,
        Device::IPhone6,
        Device::IPhone6Plus,
        Device::IPhone6S,
        Device::IPhone6SPlus,
    ];

    /// All iPads.
    pub const ALL_PADS: &'static [Device] = &[
        Device::IPad2,
        Device::IPad3,
        Device::IPad4,
        Device::IPadAir,
        Device::IPadAir2,
        Device::IPadMini,
        Device::IPadMini2,
        Device::IPadMini3,
        Device::IPadMini4,
        Device::IPadPro,
    ];

    pub fn all_simulator_pods() -> Vec<Device> {
        Self::simulators_of(Self::ALL_PODS)
    }

    pub fn all_simulator_phones() -> Vec<Device> {
        Self::simulators_of(Self::ALL_PHONES)
    }

    pub fn all_simulator_pads() -> Vec<Device> {
        Self::simulators_of(Self::ALL_PADS)
    }

    /// All real devices (every known model, no simulators).
    pub fn all_real_devices() -> Vec<Device> {
        [Self::ALL_PODS, Self::ALL_PHONES, Self::ALL_PADS].concat()
    }

    /// Whether the device is an iPod, real or simulated.
    pub fn is_pod(&self) -> bool {
        self.is_one_of(Self::ALL_PODS) || self.is_one_of(&Self::all_simulator_pods())
    }

    /// Whether the device is an iPhone, real or simulated.
    pub fn is_phone(&self) -> bool {
        self.is_one_of(Self::ALL_PHONES) || self.is_one_of(&Self::all_simulator_phones())
    }

    /// Whether the device is an iPad, real or simulated.
    pub fn is_pad(&self) -> bool {
        self.is_one_of(Self::ALL_PADS) || self.is_one_of(&Self::all_simulator_pads())
    }

    /// Family of the device, looking through a simulator wrapper.
    pub fn family(&self) -> Option<DeviceFamily> {
        if self.is_pod() {
            Some(DeviceFamily::Pod)
        } else if self.is_phone() {
            Some(DeviceFamily::Phone)
        } else if self.is_pad() {
            Some(DeviceFamily::Pad)
        } else {
            None
        }
    }

    fn model_name(&self) -> Option<&'static str> {
        let name = match self {
            Device::IPodTouch5 => "iPod Touch 5",
            Device::IPodTouch6 => "iPod Touch 6",
            Device::IPhone4 => "iPhone 4",
            Device::IPhone4S => "iPhone 4s",
            Device::IPhone5 => "iPhone 5",
            Device::IPhone5C => "iPhone 5c",
            Device::IPhone5S => "iPhone 5s",
            Device::IPhone6 => "iPhone 6",
            Device::IPhone6Plus => "iPhone 6 Plus",
            Device::IPhone6S => "iPhone 6s",
            Device::IPhone6SPlus => "iPhone 6s Plus",
            Device::IPad2 => "iPad 2",
            Device::IPad3 => "iPad 3",
            Device::IPad4 => "iPad 4",
            Device::IPadAir => "iPad Air",
            Device::IPadAir2 => "iPad Air 2",
            Device::IPadMini => "iPad Mini",
            Device::IPadMini2 => "iPad Mini 2",
            Device::IPadMini3 => "iPad Mini 3",
            Device::IPadMini4 => "iPad Mini 4",
            Device::IPadPro => "iPad Pro",
            Device::Simulator(_) | Device::UnknownDevice(_) => return None,
        };
        Some(name)
    }
}

#[cfg(tv_platform)]
impl Device {
    /// All Apple TVs.
    pub const ALL_TVS: &'static [Device] = &[Device::AppleTv4];

    pub fn all_simulator_tvs() -> Vec<Device> {
        Self::simulators_of(Self::ALL_TVS)
    }

    /// All real devices (every known model, no simulators).
    pub fn all_real_devices() -> Vec<Device> {
        Self::ALL_TVS.to_vec()
    }

    /// Whether the device is an Apple TV, real or simulated.
    pub fn is_tv(&self) -> bool {
        self.is_one_of(Self::ALL_TVS) || self.is_one_of(&Self::all_simulator_tvs())
    }

    /// Family of the device, looking through a simulator wrapper.
    pub fn family(&self) -> Option<DeviceFamily> {
        self.is_tv().then_some(DeviceFamily::Tv)
    }

    fn model_name(&self) -> Option<&'static str> {
        match self {
            Device::AppleTv4 => Some("Apple TV 4"),
            Device::Simulator(_) | Device::UnknownDevice(_) => None,
        }
    }
}

impl Device {
    /// Every real device wrapped as a simulator.
    pub fn all_simulators() -> Vec<Device> {
        Self::simulators_of(&Self::all_real_devices())
    }

    fn simulators_of(devices: &[Device]) -> Vec<Device> {
        devices.iter().cloned().map(Device::into_simulator).collect()
    }

    /// Wrap the device as running in the simulator.
    ///
    /// A device that is already a simulator is returned unchanged.
    pub fn into_simulator(self) -> Device {
        match self {
            Device::Simulator(_) => self,
            other => Device::Simulator(Box::new(other)),
        }
    }

    /// Whether the current device is one of the given ones.
    ///
    /// Uses description equality, so a simulated device only matches simulator entries.
    pub fn is_one_of(&self, devices: &[Device]) -> bool {
        devices.contains(self)
    }

    pub fn is_simulator(&self) -> bool {
        matches!(self, Device::Simulator(_))
    }

    /// The model running inside the simulator, if this is one.
    pub fn simulated_device(&self) -> Option<&Device> {
        match self {
            Device::Simulator(inner) => Some(inner),
            _ => None,
        }
    }

    /// Human-readable model name, e.g. "iPhone 6s" or "Simulator (iPad Air 2)".
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Simulator(model) => write!(f, "Simulator ({})", model),
            Device::UnknownDevice(identifier) => f.write_str(identifier),
            model => f.write_str(model.model_name().unwrap_or_default()),
        }
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.description() == other.description()
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.description().hash(state);
    }
}

impl Serialize for Device {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(all(test, not(tv_platform)))]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_descriptions() {
        assert_eq!(Device::IPhone6.to_string(), "iPhone 6");
        assert_eq!(Device::IPhone4S.to_string(), "iPhone 4s");
        assert_eq!(Device::IPadMini4.to_string(), "iPad Mini 4");
        assert_eq!(Device::IPodTouch5.to_string(), "iPod Touch 5");
    }

    #[test]
    fn test_simulator_description() {
        let device = Device::IPhone6.into_simulator();
        assert_eq!(device.description(), "Simulator (iPhone 6)");
    }

    #[test]
    fn test_unknown_device_description_is_verbatim() {
        assert_eq!(Device::UnknownDevice("foo".to_string()).description(), "foo");
    }

    #[test]
    fn test_family_ignores_simulator_wrapping() {
        let simulated = Device::IPhone6.into_simulator();
        assert!(simulated.is_phone());
        assert!(!simulated.is_pod());
        assert!(!simulated.is_pad());

        assert!(Device::IPhone6.is_phone());
        assert!(Device::IPadPro.into_simulator().is_pad());
        assert!(Device::IPodTouch6.is_pod());
    }

    #[test]
    fn test_unknown_device_has_no_family() {
        let device = Device::UnknownDevice("iPhone99,1".to_string());
        assert!(!device.is_pod());
        assert!(!device.is_phone());
        assert!(!device.is_pad());
        assert_eq!(device.family(), None);
        assert_eq!(UserInterfaceIdiom::for_device(&device), UserInterfaceIdiom::Unspecified);
    }

    #[test]
    fn test_equality_is_by_description() {
        assert_eq!(Device::IPhone6, Device::IPhone6);
        assert_ne!(Device::IPhone6, Device::IPhone6Plus);

        // Different tags, same display string.
        assert_eq!(
            Device::UnknownDevice("iPhone 6".to_string()),
            Device::IPhone6
        );
        assert_eq!(
            Device::UnknownDevice("Simulator (iPad 2)".to_string()),
            Device::IPad2.into_simulator()
        );
    }

    #[test]
    fn test_hash_follows_description() {
        let mut set = HashSet::new();
        set.insert(Device::IPhone6);
        assert!(set.contains(&Device::UnknownDevice("iPhone 6".to_string())));
    }

    #[test]
    fn test_is_one_of_distinguishes_simulators() {
        let simulated = Device::IPodTouch5.into_simulator();
        assert!(!simulated.is_one_of(Device::ALL_PODS));
        assert!(simulated.is_one_of(&Device::all_simulator_pods()));
    }

    #[test]
    fn test_into_simulator_does_not_double_wrap() {
        let once = Device::IPad3.into_simulator();
        let twice = once.clone().into_simulator();
        assert_eq!(twice.description(), "Simulator (iPad 3)");
        assert!(twice.simulated_device().is_some_and(|inner| !inner.is_simulator()));
    }

    #[test]
    fn test_all_simulators_wrap_every_real_device() {
        let real = Device::all_real_devices();
        let simulators = Device::all_simulators();

        assert_eq!(real.len(), 20);
        assert!(!real.contains(&Device::IPhone5C));
        assert_eq!(real.len(), simulators.len());
        for (device, simulator) in real.iter().zip(&simulators) {
            assert_eq!(simulator.simulated_device(), Some(device));
        }
    }

    #[test]
    fn test_family_and_idiom() {
        assert_eq!(Device::IPodTouch6.family(), Some(DeviceFamily::Pod));
        assert_eq!(Device::IPhone5.family(), Some(DeviceFamily::Phone));
        assert_eq!(Device::IPadAir.into_simulator().family(), Some(DeviceFamily::Pad));

        assert_eq!(UserInterfaceIdiom::for_device(&Device::IPodTouch6), UserInterfaceIdiom::Phone);
        assert_eq!(UserInterfaceIdiom::for_device(&Device::IPadMini), UserInterfaceIdiom::Pad);
    }

    #[test]
    fn test_iphone_5c_has_no_family() {
        assert!(!Device::IPhone5C.is_phone());
        assert!(!Device::IPhone5C.into_simulator().is_phone());
        assert_eq!(Device::IPhone5C.family(), None);
        assert_eq!(
            UserInterfaceIdiom::for_device(&Device::IPhone5C),
            UserInterfaceIdiom::Unspecified
        );
        assert_eq!(Device::IPhone5C.to_string(), "iPhone 5c");
    }

    #[test]
    fn test_serializes_as_description() {
        let json = serde_json::to_string(&Device::IPhone6SPlus.into_simulator()).unwrap();
        assert_eq!(json, "\"Simulator (iPhone 6s Plus)\"");
    }
}
