//! Environment source: TRAVELKIT__MAP__PADDING=1.5 sets `map.padding`.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TRAVELKIT")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
