/// Row-major table backing the LCS dynamic program.
///
/// Cells are `u32` so that long documents can't overflow the running
/// subsequence length.
pub struct DPMatrix {
    pub n_rows: usize,
    pub n_cols: usize,
    data: Vec<u32>,
}

impl DPMatrix {
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            data: vec![0; n_rows * n_cols],
            n_rows,
            n_cols,
        }
    }
    pub fn at(&self, i: usize, j: usize) -> u32 {
        self.data[i * self.n_cols + j]
    }
    pub fn set(&mut self, i: usize, j: usize, val: u32) {
        self.data[i * self.n_cols + j] = val;
    }
}

/// A whitespace-tokenized text. No case or punctuation normalization is
/// applied, so `"Fox"` and `"fox."` are distinct tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub text: String,
    pub word_vector: Vec<String>,
    pub n_words: usize,
}

impl Sequence {
    pub fn new(text: &str) -> Self {
        let word_vec = str_to_word_vec(text);
        let word_vec_len = word_vec.len();
        Sequence {
            text: text.to_string(),
            word_vector: word_vec,
            n_words: word_vec_len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    pub fn bigrams(&self) -> Vec<String> {
        words_to_bigrams(&self.word_vector)
    }
}

pub fn str_to_word_vec(string: &str) -> Vec<String> {
    string.split_whitespace().map(|s| s.to_string()).collect()
}

/// Joins each pair of adjacent words with a single space.
/// Fewer than two words yield no bigrams.
pub fn words_to_bigrams(word_vec: &[String]) -> Vec<String> {
    word_vec
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect()
}
