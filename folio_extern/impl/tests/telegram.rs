use folio_extern_contracts::telegram::TelegramApiService;
use folio_extern_impl::telegram::{TelegramApiServiceConfig, TelegramApiServiceImpl};
use folio_models::telegram::{TelegramBotToken, TelegramChatId};
use tokio::net::TcpListener;
use url::Url;

const TOKEN: &str = "test-token";
const CHAT_ID: &str = "1337";

#[tokio::test]
async fn send_message_acknowledged() {
    let sut = make_sut(TOKEN).await;
    let ok = sut.send_message(&chat_id(CHAT_ID), "Hello!").await.unwrap();
    assert!(ok);
}

#[tokio::test]
async fn send_message_rejected_by_api() {
    // HTTP 200 with ok=false must surface as a failed delivery
    let sut = make_sut(TOKEN).await;
    let ok = sut
        .send_message(&chat_id(CHAT_ID), "fail this one")
        .await
        .unwrap();
    assert!(!ok);
}

#[tokio::test]
async fn send_message_unknown_chat() {
    let sut = make_sut(TOKEN).await;
    let ok = sut.send_message(&chat_id("42"), "Hello!").await.unwrap();
    assert!(!ok);
}

#[tokio::test]
async fn send_message_bad_token() {
    let sut = make_sut("wrong-token").await;
    let ok = sut.send_message(&chat_id(CHAT_ID), "Hello!").await.unwrap();
    assert!(!ok);
}

#[tokio::test]
async fn get_me_ok() {
    let sut = make_sut(TOKEN).await;
    sut.get_me().await.unwrap();
}

#[tokio::test]
async fn get_me_bad_token() {
    let sut = make_sut("wrong-token").await;
    sut.get_me().await.unwrap_err();
}

fn chat_id(value: &str) -> TelegramChatId {
    TelegramChatId::try_new(value.to_owned()).unwrap()
}

async fn make_sut(token: &str) -> TelegramApiServiceImpl {
    let router = folio_testing::telegram::router(TOKEN.into(), CHAT_ID.into());
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let api_base = format!("http://{}/", listener.local_addr().unwrap())
        .parse::<Url>()
        .unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let token = TelegramBotToken::try_new(token.to_owned()).unwrap();
    TelegramApiServiceImpl::new(TelegramApiServiceConfig::new(Some(api_base), token.into()))
}
