mod html;
mod plain_text;
