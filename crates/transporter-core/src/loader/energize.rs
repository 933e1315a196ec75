//! Pipeline entry point

use super::diagnostics::{dump_cli_arguments, dump_environment};
use super::inputs::HostInputs;
use super::layers::{apply_cli_layer, apply_env_layer, apply_store_layer};
use super::options::{DEFAULT_DUMP_CLI_ARGUMENTS, DEFAULT_DUMP_ENVIRONMENT, TransporterOptions};
use crate::error::{TransporterError, TransporterResult};
use crate::pattern::Pattern;
use crate::state::State;
use tracing::{debug, info};

/// Resolve a pattern against every input layer and publish it as a [`State`]
///
/// Layers apply in order store, environment, command line. The returned
/// state's Active and Stored snapshots both hold the resolved pattern.
///
/// # Errors
///
/// [`TransporterError::RequiredMissing`] when a required sequence is still
/// empty once all layers ran. Load failures and malformed or unknown inputs
/// are logged and skipped.
pub fn energize(
    mut pattern: Pattern,
    options: TransporterOptions,
    inputs: HostInputs,
) -> TransporterResult<State> {
    info!("Energizing {} sequences...", pattern.len());

    if let Some(engine) = options.persistence.as_deref() {
        let report = apply_store_layer(&mut pattern, engine);
        debug!("Store layer: {:?}", report);
    }

    if options.dump_environment.resolve(DEFAULT_DUMP_ENVIRONMENT) {
        dump_environment(&inputs.env);
    }
    let report = apply_env_layer(&mut pattern, &inputs.env, &options.env_prefix);
    debug!("Environment layer: {:?}", report);

    if options
        .dump_cli_arguments
        .resolve(DEFAULT_DUMP_CLI_ARGUMENTS)
    {
        dump_cli_arguments(&inputs.args);
    }
    let report = apply_cli_layer(&mut pattern, &inputs.args);
    debug!("CLI layer: {:?}", report);

    let missing = pattern.missing_required();
    if !missing.is_empty() {
        return Err(TransporterError::RequiredMissing { keys: missing });
    }

    info!("Energized!");
    Ok(State::new(pattern, options.persistence))
}
