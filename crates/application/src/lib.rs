//! Stratum Application - Resolution pipeline and use cases
//!
//! This crate holds the resolution core (scope collapsing, interpolation,
//! secret resolution, sorting) and the ports it needs from the outside world.
//!
//! # Usage
//!
//! ```
//! use stratum_application::resolution::{interpolate, secret_names};
//! use stratum_domain::EffectiveMapping;
//!
//! let mut env = EffectiveMapping::new();
//! env.insert("HOST".to_string(), "db".to_string());
//! env.insert("URL".to_string(), "postgres://${HOST}".to_string());
//! env.insert("PASS".to_string(), "secret://db/pass".to_string());
//!
//! interpolate(&mut env);
//! assert_eq!(env["URL"], "postgres://db");
//! assert!(secret_names(&env).contains("PASS"));
//! ```

pub mod error;
pub mod ports;
pub mod resolution;
pub mod use_cases;

pub use error::{ResolveError, ResolveResult};
pub use resolution::ResolveMode;
