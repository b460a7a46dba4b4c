use crate::macros::nutype_string;

nutype_string!(TelegramBotToken(validate(not_empty)));

/// Destination of bot messages, either a numeric chat id or an `@channel`
/// handle. The Bot API accepts both as strings.
nutype_string!(TelegramChatId(validate(not_empty)));
