//! Recipes Module
//!
//! Recipe listing, detail, creation, and the owner-gated mutations.
//!
//! # Module Structure
//!
//! ```text
//! recipes/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Row and request/response types
//! ├── update.rs    - Sparse partial-update statement builder
//! ├── mutations.rs - Ownership-checked mutations
//! └── handlers.rs  - HTTP handlers
//! ```
//!
//! # Ownership Discipline
//!
//! Every mutation of an owned recipe is one atomic statement filtered by
//! `id = $recipe AND user_id = $owner`. There is no separate ownership
//! lookup, so there is no check-then-act window. Zero affected rows
//! means "not found or not yours" and maps to 404 without revealing
//! which.

pub mod handlers;
pub mod mutations;
pub mod types;
pub mod update;

pub use mutations::{edit_recipe, set_recipe_active};
pub use types::{NewRecipeRequest, RecipeDetail, RecipeSummary};
pub use update::{build_recipe_update, RecipeEdit, UpdateStatement, EDITABLE_COLUMNS};
