pub use color_eyre::eyre::{eyre, Result};
pub use log::{debug, info, warn};
