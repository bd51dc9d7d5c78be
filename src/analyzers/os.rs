use serde::Serialize;
use std::fmt;

/// Operating system family inferred from a phone brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Os {
    #[serde(rename = "iOS")]
    Ios,
    Android,
    Unknown,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Os::Ios => "iOS",
            Os::Android => "Android",
            Os::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Known brands, lowercase, and the OS they ship.
static BRAND_OS: &[(&str, Os)] = &[
    ("apple", Os::Ios),
    ("samsung", Os::Android),
    ("huawei", Os::Android),
    ("google", Os::Android),
    ("oneplus", Os::Android),
    ("xiaomi", Os::Android),
    ("oppo", Os::Android),
    ("vivo", Os::Android),
    ("nokia", Os::Android),
    ("sony", Os::Android),
];

/// Infers the OS for a brand, case-insensitively.
///
/// | Brand                                                       | OS      |
/// |-------------------------------------------------------------|---------|
/// | apple                                                       | iOS     |
/// | samsung, huawei, google, oneplus, xiaomi, oppo, vivo, nokia, sony | Android |
/// | anything else, or no brand                                  | Unknown |
pub fn infer_os(brand: Option<&str>) -> Os {
    let Some(brand) = brand else {
        return Os::Unknown;
    };
    let brand = brand.to_lowercase();
    BRAND_OS
        .iter()
        .find(|(name, _)| *name == brand)
        .map(|(_, os)| *os)
        .unwrap_or(Os::Unknown)
}
