//! Native preview of the stage in a desktop window.

use mage_stage::{StageConfig, flow, stage_constructor};

fn main() -> anyhow::Result<()> {
    let config = StageConfig::default();
    flow::run::<()>(config.clone(), vec![stage_constructor(config)])
}
