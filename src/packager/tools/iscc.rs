//! Inno Setup compilation.
//!
//! iscc re-signs the files it packages by running the command registered
//! with `/s<name>=<command>`. The command is rendered from the configured
//! Handlebars template with the run's credentials.

use super::Invocation;
use crate::packager::{
    Credentials, Phase, Settings,
    error::{Error, Result},
};
use handlebars::Handlebars;
use std::collections::BTreeMap;

/// Render the signing command iscc runs for each packaged file.
pub fn sign_command(settings: &Settings, credentials: &Credentials) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    let tools = settings.tools();
    let mut data = BTreeMap::new();
    data.insert("signtool", tools.signtool.as_str());
    data.insert("verbosity", settings.verbosity().signtool_flag());
    data.insert("cert", credentials.certificate());
    data.insert("password", credentials.password());
    data.insert("timestamp_url", tools.timestamp_url.as_str());

    handlebars
        .render_template(&tools.sign_template, &data)
        .map_err(|e| Error::Template(e.to_string()))
}

/// `iscc.exe [/Qp] "/s<name>=<sign command>" <script>.iss`
pub fn invocation(settings: &Settings, credentials: &Credentials) -> Result<Invocation> {
    let tools = settings.tools();
    let mut invocation =
        Invocation::new(Phase::Package, &tools.iscc).current_dir(settings.working_dir());

    if let Some(flag) = settings.verbosity().iscc_flag() {
        invocation = invocation.arg(flag);
    }

    let command = sign_command(settings, credentials)?;
    let shown = sign_command(settings, &credentials.redacted())?;
    Ok(invocation
        .masked_arg(
            format!("/s{}={}", tools.sign_tool_name, command),
            format!("/s{}={}", tools.sign_tool_name, shown),
        )
        .arg(settings.installer_script().display().to_string()))
}
