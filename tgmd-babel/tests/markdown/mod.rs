mod convert;
mod fixtures;
mod html_import;
mod properties;
