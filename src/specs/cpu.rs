//! CPU socket and TDP.

use super::{compile, first_capture, Attribute, SpecMap};
use regex_lite::Regex;
use std::sync::LazyLock;
use tracing::debug;

static TDP: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile(&[r"tdp\s*(\d{2,3})\s*w", r"(\d{2,3})\s*w\s*tdp"]));

/// Literal socket names as they appear in listings.
const SOCKET_TOKENS: &[(&str, &[&str])] = &[
    ("LGA1700", &["lga1700", "lga 1700"]),
    ("LGA1200", &["lga1200", "lga 1200"]),
    ("LGA1151", &["lga1151", "lga 1151"]),
    ("AM5", &["am5", "socket am5"]),
    ("AM4", &["am4", "socket am4"]),
    ("sTRX4", &["strx4", "trx4"]),
    ("sTR4", &["str4", "tr4"]),
];

/// Intel 12th-14th gen (Alder Lake, Raptor Lake).
const LGA1700_MODELS: &[&str] = &[
    "12th", "13th", "14th", "i3-12", "i3-13", "i3-14", "i5-12", "i5-13", "i5-14", "i7-12",
    "i7-13", "i7-14", "i9-12", "i9-13", "i9-14",
];

/// Intel 10th-11th gen (Comet Lake, Rocket Lake).
const LGA1200_MODELS: &[&str] =
    &["10th", "11th", "i3-10", "i3-11", "i5-10", "i5-11", "i7-10", "i7-11", "i9-10", "i9-11"];

/// Ryzen 7000 series.
const AM5_MODELS: &[&str] = &[
    "ryzen 7 7", "ryzen 5 7", "ryzen 9 7", "ryzen 3 7", "7950x", "7900x", "7800x3d", "7700x",
    "7600x", "7600",
];

/// Ryzen 5000, 3000, 2000 and 1000 series.
const AM4_MODELS: &[&str] = &[
    "ryzen 7 5", "ryzen 5 5", "ryzen 9 5", "ryzen 7 3", "ryzen 5 3", "ryzen 9 3", "ryzen 7 2",
    "ryzen 5 2", "ryzen 7 1", "ryzen 5 1", "5950x", "5900x", "5800x3d", "5800x", "5700x", "5600x",
    "5600", "3950x", "3900x", "3800x", "3700x", "3600x", "3600",
];

/// Threadripper 3000 models on sTRX4; older Threadrippers use sTR4.
const STRX4_MODELS: &[&str] = &["3990x", "3970x", "3960x"];

/// Extracts TDP and socket from a CPU product name.
///
/// The socket is first inferred from the model generation, then any literal
/// socket token in the name replaces it. When several tokens are present the
/// last entry of the token table that matches wins.
pub fn extract_cpu_specs(product_name: &str) -> SpecMap {
    let mut specs = SpecMap::new();
    let name = product_name.to_lowercase();

    if let Some(watts) = first_capture(&name, &TDP) {
        debug!("Detected TDP: {}W", watts);
        specs.insert(Attribute::Tdp, format!("{}W", watts));
    }

    if let Some(socket) = infer_socket(&name) {
        specs.insert(Attribute::Socket, socket.to_string());
    }

    for (socket, tokens) in SOCKET_TOKENS {
        if tokens.iter().any(|t| name.contains(t)) {
            specs.insert(Attribute::Socket, socket.to_string());
        }
    }

    if let Some(socket) = specs.get(&Attribute::Socket) {
        debug!("Detected CPU socket: {}", socket);
    }

    specs
}

fn infer_socket(name: &str) -> Option<&'static str> {
    let mentions = |models: &[&str]| models.iter().any(|m| name.contains(m));

    if mentions(LGA1700_MODELS) {
        Some("LGA1700")
    } else if mentions(LGA1200_MODELS) {
        Some("LGA1200")
    } else if mentions(AM5_MODELS) {
        Some("AM5")
    } else if mentions(AM4_MODELS) {
        Some("AM4")
    } else if name.contains("threadripper") {
        Some(if mentions(STRX4_MODELS) { "sTRX4" } else { "sTR4" })
    } else {
        None
    }
}
