use novelread_lib::{
    Error, Result,
    models::{
        Chapter, ChapterResponse, ChaptersResponse, Novel, NovelResponse, NovelsResponse,
        RelatedNovelsResponse, decode,
    },
};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::utils::api;

async fn get_json<T>(url: String) -> Result<T>
where
    T: DeserializeOwned,
{
    info!("GET {}", url);

    let client = reqwest::Client::new();
    let res = client
        .get(&url)
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            url,
        });
    }

    let body = res
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    decode(&body)
}

/// Shared by the carousel and the updates feed.
pub async fn fetch_novels() -> Result<Vec<Novel>> {
    let data: NovelsResponse = get_json(api().novels()).await?;
    Ok(data.novels)
}

pub async fn fetch_novel(slug: &str) -> Result<Novel> {
    let data: NovelResponse = get_json(api().novel(slug)).await?;
    Ok(data.novel)
}

pub async fn fetch_related_novels(slug: &str) -> Result<Vec<Novel>> {
    let data: RelatedNovelsResponse = get_json(api().related_novels(slug)).await?;
    Ok(data.related_novels)
}

pub async fn fetch_chapters(slug: &str) -> Result<Vec<Chapter>> {
    let data: ChaptersResponse = get_json(api().chapters(slug)).await?;
    Ok(data.chapters)
}

pub async fn fetch_chapter(slug: &str) -> Result<ChapterResponse> {
    get_json(api().chapter(slug)).await
}
