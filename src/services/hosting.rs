use std::net::IpAddr;
use crate::models::config::{HostingBrand, HostingPrefix};

/// Ordered lookup tables for guessing where a server is hosted. First match wins.
#[derive(Debug, Clone)]
pub struct HostingTable {
    brands: Vec<HostingBrand>,
    prefixes: Vec<HostingPrefix>
}

impl HostingTable {
    pub fn new(brands: &[HostingBrand], prefixes: &[HostingPrefix]) -> Self {
        HostingTable {
            brands: brands.iter()
                .map(|o| HostingBrand { pattern: o.pattern.to_lowercase(), label: o.label.clone() })
                .collect(),
            prefixes: prefixes.to_vec()
        }
    }

    /// `resolved` is the result of the name lookup, `redirect` whatever host the server itself pointed us to.
    pub fn guess(&self, host: &str, resolved: Option<IpAddr>, redirect: Option<&str>) -> String {
        // An address handed to us by the server is as good as our own lookup.
        let resolved = resolved.or_else(|| redirect.and_then(|o| o.trim().parse::<IpAddr>().ok()));

        let ip = match resolved {
            Some(ip) => ip.to_string(),
            None => {
                return redirect
                    .filter(|o| !o.is_empty())
                    .unwrap_or("Unknown")
                    .to_string();
            }
        };

        let host = host.to_lowercase();

        if let Some(brand) = self.brands.iter().find(|o| host.contains(&o.pattern)) {
            return brand.label.clone();
        }

        if let Some(prefix) = self.prefixes.iter().find(|o| ip.starts_with(&o.prefix)) {
            return prefix.label.clone();
        }

        ip
    }
}
