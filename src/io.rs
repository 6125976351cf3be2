use crate::error::InputFormatError;
use crate::map::{Map, Row};
use either::Either;
use std::io::BufRead;
use std::str::FromStr;

/// Parses every line of the input as a `T`, after trimming the trailing whitespace.
pub struct OnePerLine<I, T> {
    input: I,
    buffer: String,
    _type_of_t: std::marker::PhantomData<T>,
}

impl<I: BufRead, T: FromStr> OnePerLine<I, T> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            buffer: String::new(),
            _type_of_t: Default::default(),
        }
    }
}

impl<I, T> Iterator for OnePerLine<I, T>
where
    I: BufRead,
    T: FromStr + 'static,
    T::Err: 'static,
{
    type Item = Result<T, Either<T::Err, std::io::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let read = self.input.read_line(&mut self.buffer);
        match read {
            Ok(0) => None,
            Ok(_) => match T::from_str(self.buffer.trim_end()) {
                Ok(t) => Some(Ok(t)),
                Err(e) => Some(Err(Either::Left(e))),
            },
            Err(e) => Some(Err(Either::Right(e))),
        }
    }
}

/// Reads the whole input and validates it as a [`Map`].
pub fn read_map<R: BufRead>(input: R) -> Result<Map, InputFormatError> {
    let rows = OnePerLine::<_, Row>::new(input)
        .enumerate()
        .map(|(row, parsed)| {
            parsed.map_err(|e| match e {
                Either::Left(e) => e.at(row),
                Either::Right(e) => InputFormatError::Io(e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Map::from_rows(rows)
}
