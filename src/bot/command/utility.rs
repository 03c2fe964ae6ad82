use serenity::all::{Colour, CreateEmbed, Mentionable};

use super::Context;
use crate::{
    error::AppError,
    service::utility::{flip_coin, roll_dice},
};

/// Roll a six-sided die
#[poise::command(slash_command, guild_only)]
pub async fn dice(ctx: Context<'_>) -> Result<(), AppError> {
    let roll = roll_dice(&mut rand::rng());

    let embed = CreateEmbed::new()
        .title("Dice Roll 🎲")
        .colour(Colour::DARK_GREEN)
        .description(format!(
            "{} rolled a dice and got: **{}**",
            ctx.author().mention(),
            roll
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Flip a coin
#[poise::command(slash_command, guild_only)]
pub async fn coinflip(ctx: Context<'_>) -> Result<(), AppError> {
    let side = flip_coin(&mut rand::rng());

    let embed = CreateEmbed::new()
        .title("Coin Flip 🪙")
        .colour(Colour::GOLD)
        .description(format!(
            "{} flipped a coin and got: **{}**",
            ctx.author().mention(),
            side.label()
        ));

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
