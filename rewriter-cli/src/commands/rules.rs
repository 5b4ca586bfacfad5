use anyhow::Result;

use rewriter::core::{OutputWriter, RuleSetListing};
use rewriter::Preset;

pub fn run(preset: Option<Preset>, format: &crate::OutputFormat) -> Result<()> {
    let presets: Vec<Preset> = match preset {
        Some(preset) => vec![preset],
        None => Preset::all().to_vec(),
    };

    let resolved = presets
        .iter()
        .map(|preset| Ok((*preset, preset.rule_set()?, preset.filter())))
        .collect::<Result<Vec<_>>>()?;

    let listings: Vec<RuleSetListing<'_>> = resolved
        .iter()
        .map(|(preset, rules, filter)| RuleSetListing {
            name: preset.name(),
            description: preset.description(),
            rules,
            filter,
        })
        .collect();

    OutputWriter::new(format.into()).write_rule_sets(&listings)?;

    Ok(())
}
