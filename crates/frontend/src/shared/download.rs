//! Печатные документы: PDF из ответа печатных маршрутов или ссылка на него.

use contracts::shared::graphql::GraphqlFailure;
use contracts::usecases::common::PrintResponse;
use gloo_net::http::Response;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Скачивает PDF (`application/pdf`) или открывает ссылку из `{ url }`.
pub async fn open_document(response: Response, fallback_name: &str) -> Result<(), GraphqlFailure> {
    let content_type = response.headers().get("content-type").unwrap_or_default();

    if content_type.starts_with("application/pdf") {
        let file_name = response
            .headers()
            .get("content-disposition")
            .and_then(|value| file_name_from_disposition(&value))
            .unwrap_or_else(|| fallback_name.to_string());
        let bytes = response
            .binary()
            .await
            .map_err(|e| GraphqlFailure::new(format!("Failed to read document: {}", e)))?;
        let blob = pdf_blob(&bytes).map_err(GraphqlFailure::new)?;
        return download_blob(&blob, &file_name).map_err(GraphqlFailure::new);
    }

    let link: PrintResponse = response
        .json()
        .await
        .map_err(|e| GraphqlFailure::new(format!("Failed to parse response: {}", e)))?;
    let window = web_sys::window().ok_or_else(|| GraphqlFailure::new("No window object"))?;
    window
        .open_with_url_and_target(&link.url, "_blank")
        .map_err(|e| GraphqlFailure::new(format!("Failed to open document: {:?}", e)))?;
    Ok(())
}

/// `attachment; filename="label-L1.pdf"` → `label-L1.pdf`
fn file_name_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

fn pdf_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_disposition() {
        assert_eq!(
            file_name_from_disposition("attachment; filename=\"label-L1.pdf\""),
            Some("label-L1.pdf".to_string())
        );
        assert_eq!(file_name_from_disposition("inline"), None);
        assert_eq!(file_name_from_disposition("attachment; filename=\"\""), None);
    }
}
