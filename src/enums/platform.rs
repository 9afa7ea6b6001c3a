use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "Shopify (Plus Edition)")]
    ShopifyPlus,
    #[serde(rename = "Custom React/Next.js")]
    CustomReact,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::ShopifyPlus => "Shopify (Plus Edition)",
            Platform::CustomReact => "Custom React/Next.js",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
