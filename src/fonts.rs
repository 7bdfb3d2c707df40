use serde::Serialize;

const STYLESHEET_BASE: &str = "https://fonts.googleapis.com/css2";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
/// Font families the editor offers and the remote stylesheet provides.
pub enum FontFamily {
    /// Inter (400-700).
    Inter,
    /// Roboto (no 600 cut).
    Roboto,
    /// Poppins (400-700).
    Poppins,
}

impl FontFamily {
    /// Catalogue order, also the order families appear in the stylesheet URL.
    pub const ALL: [FontFamily; 3] = [Self::Inter, Self::Roboto, Self::Poppins];

    /// Wire spellings (family names as CSS expects them).
    pub const TOKENS: &'static [&'static str] = &["Inter", "Roboto", "Poppins"];

    /// Family whose display name is exactly `token`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == token)
    }

    /// Display name, as stored in `fontFamily`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Roboto => "Roboto",
            Self::Poppins => "Poppins",
        }
    }

    /// Weights the stylesheet actually loads for this family.
    pub fn weights(self) -> &'static [u32] {
        match self {
            Self::Inter | Self::Poppins => &[400, 500, 600, 700],
            Self::Roboto => &[400, 500, 700],
        }
    }

    /// Whether `weight` renders with a real cut rather than a synthesized one.
    pub fn has_weight(self, weight: u32) -> bool {
        self.weights().contains(&weight)
    }
}

/// URL of the stylesheet that makes every catalogue family available by name.
///
/// Loading it is the surface's job; it must be injected at most once per process.
pub fn stylesheet_url() -> String {
    let mut url = String::from(STYLESHEET_BASE);
    for (i, family) in FontFamily::ALL.into_iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str("family=");
        url.push_str(family.name());
        url.push_str(":wght@");
        let weights: Vec<String> = family.weights().iter().map(u32::to_string).collect();
        url.push_str(&weights.join(";"));
    }
    url.push_str("&display=swap");
    url
}

#[cfg(test)]
#[path = "../tests/unit/fonts.rs"]
mod tests;
