//! Show command implementation.

use miette::Result;

use gradeps_ops::ops_show::{self, ShowFormat};
use gradeps_util::errors::GradepsError;

use super::Context;

pub fn exec(ctx: &Context, format: &str) -> Result<()> {
    let format = ShowFormat::parse(format).ok_or_else(|| GradepsError::Generic {
        message: format!("Unknown output format '{format}' (expected text, json, or gradle)"),
    })?;
    ops_show::show(&ctx.script, &ctx.options, format)
}
