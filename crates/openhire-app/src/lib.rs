// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod carousel;
pub mod filter;
pub mod forms;
pub mod ids;
pub mod model;
pub mod selection;
pub mod state;

pub use carousel::*;
pub use filter::*;
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use selection::*;
pub use state::*;
