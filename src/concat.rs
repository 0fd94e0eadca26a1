use rayon::prelude::*;

use crate::{
    io::{ReadError, ReadErrorKind},
    source::{Source, SourceFile},
};

/// Join the contents of `files` into one text, in the given order.
///
/// Each file's text is terminated with a newline before the next file
/// begins, so a file without a trailing newline cannot glue its last line to
/// the next file's first line.
///
/// Files are read in parallel. When several files fail, the error of the
/// earliest one in `files` is returned.
pub fn concatenate(files: &[SourceFile]) -> Result<String, ReadError> {
    let reads: Vec<Result<String, ReadError>> = files
        .par_iter()
        .map(|file| -> Result<String, ReadError> {
            let contents = file.contents()?;
            String::from_utf8(contents)
                .map_err(|err| ReadError::new(file.as_path().to_owned(), ReadErrorKind::from(err)))
        })
        .collect();
    let texts = reads.into_iter().collect::<Result<Vec<_>, _>>()?;

    let mut output = String::with_capacity(texts.iter().map(|text| text.len() + 1).sum());
    for text in texts {
        output.push_str(&text);
        if !text.is_empty() && !text.ends_with('\n') {
            output.push('\n');
        }
    }
    Ok(output)
}
