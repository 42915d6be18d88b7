//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading and the seeded random source.
//!
//! ## Config loading
//! ```rust,ignore
//! use dialecta_kernel::config::load_config;
//! use dialecta_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("config/dialecta"), false).unwrap_or_default();
//! ```
//!
//! ## Randomness
//! ```rust
//! use dialecta_kernel::rng::SessionRng;
//! use rand::Rng;
//!
//! let mut a = SessionRng::from_seed_u64(7);
//! let mut b = SessionRng::from_seed_u64(7);
//! assert_eq!(a.random_range(0..100), b.random_range(0..100));
//! ```

pub mod config;
pub mod rng;

pub use dialecta_domain as domain;
