//! Deps command implementation.

use miette::Result;

use super::Context;

pub fn exec(ctx: &Context) -> Result<()> {
    gradeps_ops::ops_deps::deps(&ctx.script, &ctx.options)
}
