//! PC part categories and the per-category tables that drive extraction and suggestions.

use crate::specs::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported PC part categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Memory,
    Gpu,
    Storage,
    Psu,
    Case,
    Cooler,
    Os,
}

impl Category {
    /// Returns all supported categories.
    pub fn all() -> &'static [Category] {
        &[
            Category::Cpu,
            Category::Motherboard,
            Category::Memory,
            Category::Gpu,
            Category::Storage,
            Category::Psu,
            Category::Case,
            Category::Cooler,
            Category::Os,
        ]
    }

    /// Returns the lowercase identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Memory => "memory",
            Category::Gpu => "gpu",
            Category::Storage => "storage",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Cooler => "cooler",
            Category::Os => "os",
        }
    }

    /// Returns the kakaku.com category code used to scope suggestion searches.
    pub fn kakaku_code(&self) -> &'static str {
        match self {
            Category::Cpu => "0510",
            Category::Motherboard => "0540",
            Category::Memory => "0520",
            Category::Gpu => "0550",
            Category::Storage => "0537",
            Category::Psu => "0590",
            Category::Case => "0580",
            Category::Cooler => "0512",
            Category::Os => "0560",
        }
    }

    /// Returns the attributes this category's extractor may emit.
    pub fn attributes(&self) -> &'static [Attribute] {
        match self {
            Category::Cpu => &[Attribute::Socket, Attribute::Tdp],
            Category::Psu => &[Attribute::Wattage, Attribute::Certification],
            Category::Motherboard => {
                &[Attribute::Socket, Attribute::Chipset, Attribute::FormFactor]
            }
            Category::Memory => &[Attribute::Type, Attribute::Speed, Attribute::Capacity],
            Category::Gpu => &[Attribute::Power],
            Category::Storage => &[Attribute::Type, Attribute::Capacity],
            Category::Case => &[Attribute::FormFactor],
            Category::Cooler => &[Attribute::Type],
            Category::Os => &[Attribute::Edition, Attribute::License],
        }
    }

    /// Keywords a suggestion must contain (any one, case-insensitive) to be kept.
    ///
    /// An empty list allows every candidate.
    pub fn suggestion_keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Cpu => &["Intel", "AMD", "Core", "Ryzen", "Processor", "CPU"],
            Category::Motherboard => &[
                "ASUS",
                "MSI",
                "GIGABYTE",
                "ASRock",
                "Motherboard",
                "マザーボード",
                "Z790",
                "B760",
                "X670",
                "B650",
            ],
            Category::Memory => &["DDR4", "DDR5", "Memory", "メモリ", "RAM", "GB"],
            Category::Gpu => &[
                "GeForce",
                "Radeon",
                "グラフィックボード",
                "グラフィック",
                "ビデオカード",
                "GPU",
                "NVIDIA",
                "AMD",
                "RTX",
                "GTX",
                "RX",
                "Arc",
            ],
            Category::Storage => &["SSD", "HDD", "NVMe", "SATA", "M.2", "ストレージ"],
            Category::Psu => &["電源", "PSU", "Power Supply", "電源ユニット", "W", "80PLUS"],
            Category::Case => &["ケース", "PCケース", "タワー", "Tower", "ミドルタワー"],
            Category::Cooler => &["CPUクーラー", "クーラー", "水冷", "空冷", "ファン"],
            Category::Os => &["Windows", "OS", "オペレーティングシステム"],
        }
    }

    /// Keywords that disqualify a suggestion (case-sensitive substring).
    pub fn suggestion_excludes(&self) -> &'static [&'static str] {
        match self {
            // Golf clubs share model names with graphics cards on kakaku.com
            Category::Gpu => &["ウェッジ", "ゴルフ", "Golf", "フレックス", "ロフト", "バンス", "シャフト"],
            _ => &[],
        }
    }

    /// Example product names offered before the user has typed enough to search.
    pub fn popular_items(&self) -> &'static [&'static str] {
        match self {
            Category::Cpu => &[
                "Intel Core i9-14900K",
                "AMD Ryzen 9 7950X",
                "Intel Core i7-14700K",
                "AMD Ryzen 7 7800X3D",
            ],
            Category::Motherboard => {
                &["ASUS ROG MAXIMUS Z790", "MSI MPG B650 EDGE WIFI", "ASUS TUF GAMING B760M"]
            }
            Category::Memory => &["DDR5-6000 32GB", "DDR4-3200 16GB", "DDR5-5600 32GB"],
            Category::Gpu => &["RTX 4090", "RTX 4080 SUPER", "RTX 4070 Ti SUPER", "RX 7900 XTX"],
            Category::Storage => {
                &["Samsung 990 PRO 2TB", "WD Blue SN580 1TB", "Crucial P3 Plus 2TB"]
            }
            Category::Psu => &["Corsair RM850e 850W", "Seasonic FOCUS GX-850 850W"],
            Category::Case => &["NZXT H9 Flow", "Fractal Design Pop Air RGB"],
            Category::Cooler => &["Noctua NH-D15", "DeepCool AK620"],
            Category::Os => &["Windows 11 Home", "Windows 11 Pro"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = Category::all().iter().map(|c| c.as_str()).collect();
                format!("Unknown category: {}. Use one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_parsing() {
        assert_eq!("cpu".parse::<Category>().unwrap(), Category::Cpu);
        assert_eq!("GPU".parse::<Category>().unwrap(), Category::Gpu);
        assert_eq!(" psu ".parse::<Category>().unwrap(), Category::Psu);
        assert_eq!("os".parse::<Category>().unwrap(), Category::Os);

        let err = "keyboard".parse::<Category>().unwrap_err();
        assert!(err.contains("Unknown category"));
        assert!(err.contains("motherboard"));
    }

    #[test]
    fn test_category_display_matches_parse() {
        for category in Category::all() {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Motherboard).unwrap();
        assert_eq!(json, "\"motherboard\"");

        let parsed: Category = serde_json::from_str("\"cooler\"").unwrap();
        assert_eq!(parsed, Category::Cooler);
    }

    #[test]
    fn test_kakaku_codes_unique() {
        let codes: HashSet<_> = Category::all().iter().map(|c| c.kakaku_code()).collect();
        assert_eq!(codes.len(), Category::all().len());
        assert_eq!(Category::Gpu.kakaku_code(), "0550");
        assert_eq!(Category::Storage.kakaku_code(), "0537");
    }

    #[test]
    fn test_only_gpu_has_excludes() {
        for category in Category::all() {
            if *category == Category::Gpu {
                assert!(category.suggestion_excludes().contains(&"ゴルフ"));
            } else {
                assert!(category.suggestion_excludes().is_empty());
            }
        }
    }

    #[test]
    fn test_every_category_has_popular_items() {
        for category in Category::all() {
            let items = category.popular_items();
            assert!(!items.is_empty(), "no popular items for {}", category);
            assert!(items.len() <= 8);
        }
    }
}
