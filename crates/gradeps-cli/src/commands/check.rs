//! Check command implementation.

use miette::Result;

use super::Context;

pub fn exec(ctx: &Context, verbose: bool) -> Result<()> {
    gradeps_ops::ops_check::check(&ctx.script, &ctx.options, verbose)
}
