//! # DSP Planner
//!
//! A command-line tool and library for planning production chains in games
//! with nested crafting recipes, such as Dyson Sphere Program.
//!
//! Given an item and a desired output rate, the planner works out every
//! intermediate item needed, how many facilities of each kind must run, and
//! how fast each input is consumed:
//!
//! - Recipes may have several variants; the caller picks one per item
//! - Recipe graphs may contain cycles; a branch stops when it would repeat
//!   one of its own ancestors
//! - Demands for the same intermediate from different parents are merged
//! - Results come back in a deterministic order
//!
//! ## Modules
//!
//! - [`models`] - Recipe definitions, variant overrides and production nodes
//! - [`catalog`] - The immutable recipe lookup
//! - [`expansion`] - Recursive expansion of a request into production nodes
//! - [`aggregation`] - Merging of duplicate nodes
//! - [`sorting`] - Deterministic result ordering
//! - [`planner`] - The expand → merge → sort pipeline
//! - [`data`] - JSON and CSV recipe table loading
//! - [`display`] - Output formatting and display utilities
//! - [`error`] - Catalog loading errors
//!
//! ## Example Usage
//!
//! ```no_run
//! use dsp_planner::{
//!     display::display_plan,
//!     planner::{PlanRequest, Planner, PlannerConfig},
//! };
//!
//! // Load the recipe table once
//! let planner = Planner::from_config(&PlannerConfig::default()).unwrap();
//!
//! // One conveyor belt MK.II per second, with the second graphene recipe
//! let request = PlanRequest::new("Conveyor belt MK.II", 1.0).with_variant("Graphene", 1);
//! let plan = planner.plan(&request);
//!
//! display_plan(&request.item, request.rate, &plan);
//! ```

pub mod aggregation;
pub mod catalog;
pub mod data;
pub mod display;
pub mod error;
pub mod expansion;
pub mod models;
pub mod planner;
pub mod sorting;
pub mod wasm;
