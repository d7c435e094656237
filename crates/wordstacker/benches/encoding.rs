#![allow(missing_docs)]

use divan::{Bencher, black_box};
use wordstacker::{Padding, Tokenizer, TokenizerOptions};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

type T = u32;

fn english_corpus() -> Vec<String> {
    let paragraph = "The quick brown fox jumps over the lazy dog. \
        It's a beautiful day, and I'll be taking my 3 dogs for a walk. \
        Don't forget: the temperature is 72 degrees! \
        We've been waiting since 10:30am.";
    (0..200).map(|i| format!("{paragraph} sample {i}")).collect()
}

fn fitted_tokenizer(corpus: &[String]) -> Tokenizer<T> {
    let mut tokenizer = TokenizerOptions::default().build();
    tokenizer.fit_on_texts(corpus).unwrap();
    tokenizer
}

#[divan::bench]
fn fit(bencher: Bencher) {
    let corpus = english_corpus();

    bencher.bench(|| fitted_tokenizer(black_box(&corpus)));
}

#[divan::bench]
fn encode(bencher: Bencher) {
    let corpus = english_corpus();
    let tokenizer = fitted_tokenizer(&corpus);

    bencher.bench(|| tokenizer.texts_to_sequences(black_box(&corpus)).unwrap());
}

#[divan::bench]
fn pad(bencher: Bencher) {
    let corpus = english_corpus();
    let tokenizer = fitted_tokenizer(&corpus);
    let sequences = tokenizer.texts_to_sequences(&corpus).unwrap();

    bencher.bench(|| {
        tokenizer
            .pad_sequences(black_box(&sequences), 32, Padding::Post)
            .unwrap()
    });
}
