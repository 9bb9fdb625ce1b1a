use poise::serenity_prelude::UserId;

/// Strips every mention of the bot (`<@id>` and the nickname form `<@!id>`)
/// and trims the result.
pub fn clean_content(raw: &str, bot_user_id: UserId) -> String {
    let mention = format!("<@{bot_user_id}>");
    let nick_mention = format!("<@!{bot_user_id}>");

    raw.replace(&nick_mention, "")
        .replace(&mention, "")
        .trim()
        .to_string()
}
