// Taillard benchmark files are fixed-layout text, chumsky handles them fine

use chumsky::{prelude::*, Parser};
use structs::TaillardInstance;
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum TaillardParseError {
    #[error("ParseError occurred")]
    ParseError(Vec<Simple<char>>),
    #[error("processing time matrix incomplete: expected {expected} entries, found {found}")]
    MatrixIncomplete { expected: usize, found: usize },
    #[error("instance declares zero jobs or zero machines")]
    EmptyInstance,
}

pub fn parse_taillard(content: &str) -> Result<TaillardInstance, TaillardParseError> {
    let header_parser = crate::header_parser();
    let matrix_parser = crate::matrix_parser();
    let parser = header_parser.then(matrix_parser).then_ignore(end());

    let ((jobs, machines, initial_seed, upper_bound, lower_bound), times) = parser
        .parse(content)
        .map_err(TaillardParseError::ParseError)?;

    if jobs == 0 || machines == 0 {
        return Err(TaillardParseError::EmptyInstance);
    }

    if times.len() != jobs * machines {
        return Err(TaillardParseError::MatrixIncomplete {
            expected: jobs * machines,
            found: times.len(),
        });
    }

    let processing_times: Vec<Vec<u32>> = times.chunks(jobs).map(|row| row.to_vec()).collect();

    Ok(TaillardInstance {
        jobs,
        machines,
        initial_seed,
        upper_bound,
        lower_bound,
        processing_times,
    })
}

pub(crate) fn header_parser(
) -> impl Parser<char, (usize, usize, u64, u32, u32), Error = Simple<char>> {
    let number = text::int(10)
        .from_str::<u64>()
        .unwrapped()
        .padded()
        .labelled("header number");

    just("number of jobs, number of machines, initial seed, upper bound and lower bound :")
        .padded()
        .labelled("header line")
        .ignore_then(number.repeated().exactly(5))
        .map(|fields| {
            (
                fields[0] as usize,
                fields[1] as usize,
                fields[2],
                fields[3] as u32,
                fields[4] as u32,
            )
        })
}

pub(crate) fn matrix_parser() -> impl Parser<char, Vec<u32>, Error = Simple<char>> {
    let number = text::int(10)
        .from_str::<u32>()
        .unwrapped()
        .padded()
        .labelled("processing time");

    just("processing times :")
        .padded()
        .labelled("matrix header")
        .ignore_then(number.repeated().at_least(1))
}
