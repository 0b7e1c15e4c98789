//! Repos command implementation.

use miette::Result;

use super::Context;

pub fn exec(ctx: &Context) -> Result<()> {
    gradeps_ops::ops_repos::repos(&ctx.script, &ctx.options)
}
