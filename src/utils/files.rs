// Lectura de archivos seleccionados en <input type="file"> a memoria

use crate::models::Attachment;
use web_sys::HtmlInputElement;

/// Lee todos los archivos seleccionados en el input
pub async fn read_input_files(input: &HtmlInputElement) -> Result<Vec<Attachment>, String> {
    let Some(list) = input.files() else {
        return Ok(Vec::new());
    };

    let mut attachments = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            attachments.push(read_file(file).await?);
        }
    }
    Ok(attachments)
}

/// Lee solo el primer archivo (selector de avatar)
pub async fn read_first_file(input: &HtmlInputElement) -> Result<Option<Attachment>, String> {
    match input.files().and_then(|list| list.get(0)) {
        Some(file) => read_file(file).await.map(Some),
        None => Ok(None),
    }
}

async fn read_file(file: web_sys::File) -> Result<Attachment, String> {
    let file = gloo_file::File::from(file);
    let bytes = gloo_file::futures::read_as_bytes(&file)
        .await
        .map_err(|e| format!("No se pudo leer {}: {}", file.name(), e))?;
    Ok(Attachment::new(file.name(), file.raw_mime_type(), bytes))
}
