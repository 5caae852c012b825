//! Instance identity derivation.
//!
//! A running service process is tagged with a short identifier and a display
//! color, both taken from the 32-bit FNV-1a hash of the startup timestamp. The
//! identifier is meant for attribution across replicas, not as a unique key.

use std::time::{SystemTime, UNIX_EPOCH};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Maximum number of characters kept from the decimal hash.
pub const ID_LEN: usize = 8;

/// 32-bit FNV-1a over `bytes`.
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |h, b| {
        (h ^ u32::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

/// Identity of one service process. Immutable once derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentity {
    id: String,
    color: String,
}

impl InstanceIdentity {
    /// Derive identity from an arbitrary seed string.
    pub fn from_seed(seed: &str) -> Self {
        let hash = fnv1a_32(seed.as_bytes());
        let id = hash.to_string().chars().take(ID_LEN).collect();
        let me = Self {
            id,
            color: color_of(hash),
        };
        tracing::debug!(seed, id = %me.id, color = %me.color, "derived instance identity");
        me
    }

    /// Derive identity from the current wall clock (nanosecond resolution).
    pub fn from_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_seed(&format!("{}.{:09}", now.as_secs(), now.subsec_nanos()))
    }

    /// Use a fixed identifier; the color is still derived from its hash.
    pub fn with_id(id: impl Into<String>) -> Self {
        let id = id.into();
        let color = color_of(fnv1a_32(id.as_bytes()));
        Self { id, color }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// `#rrggbb` display color.
    pub fn color(&self) -> &str {
        &self.color
    }
}

fn color_of(hash: u32) -> String {
    format!("#{:06x}", hash & 0x00ff_ffff)
}
