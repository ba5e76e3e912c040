//! `me-show` - the authenticated user's own record.

use anyhow::Result;
use clap::Args;

use super::{first, Ctx};
use crate::output;

#[derive(Args)]
pub struct MeShowArgs {
    /// Show APIKey
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub async fn show(ctx: &mut Ctx, args: MeShowArgs) -> Result<()> {
    let reply = ctx.client.me().await?;
    let object = first(&reply, "me")?;
    if args.verbose >= 1 {
        output::print_object(object, None, &[]);
    } else {
        output::print_object(object, ctx.show_only(), &["APIKey"]);
    }
    Ok(())
}
