//! Lowering passes that rewrite playground-only syntax into plain,
//! dependency-free JavaScript.
//!
//! Transforms:
//! - `const {foo, bar} = baz` → one simple declaration per bound name
//! - `import foo from 'bar'`  → `const foo = require('bar');`
//! - tagged template literals → hoisted frozen raw-string arrays
//! - JSX elements             → element-constructor calls
//!
//! A snippet whose entire body is one bare JSX expression statement is
//! wrapped in the configured fragment constructor before JSX lowering
//! runs, so the preview renders it as the snippet's value.

pub mod destructure;
pub mod fragment;
pub mod imports;
pub mod jsx;
pub mod tagged_template;
pub mod transform;

mod error;
mod util;

pub use error::TransformError;
pub use transform::transform_module;
