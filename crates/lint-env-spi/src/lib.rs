//! # lint-env-spi
//!
//! Contract between code-quality validators and the build they inspect.
//!
//! Validators receive everything they may observe through a single
//! [`Environment`] value instead of talking to the build system. This
//! crate defines that contract and the pieces shared by every
//! implementation:
//!
//! - [`Environment`] trait exposing project layout, parameters,
//!   classpath and exclusion rules
//! - [`PathMatcher`] for separator-insensitive wildcard matching
//! - [`Loader`] for artifact lookup scoped to an explicit classpath
//! - [`MockEnvironment`] for validator tests
//!
//! ## Example
//!
//! ```
//! use lint_env_spi::{Environment, MockEnvironment};
//!
//! let env = MockEnvironment::new()?
//!     .with_excludes("style:*/generated/*");
//! assert!(env.is_excluded("style", "src/generated/Code.java"));
//! assert!(!env.is_excluded("complexity", "src/generated/Code.java"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod environment;
mod error;
mod loader;
mod mock;

pub mod exclude;
pub mod pattern;

pub use environment::{Environment, DEFAULT_ENCODING};
pub use error::EnvError;
pub use loader::{Loader, LoaderBuilder, LoaderRoot};
pub use mock::MockEnvironment;
pub use pattern::PathMatcher;
