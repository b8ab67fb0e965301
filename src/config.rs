use crate::error::{Error, Result};

use serde_json::Value;
use std::{fs::File, fmt::Display, io::BufReader};


#[derive(Clone, Debug, PartialEq)]
pub struct JsonTypes {
    pub corpus_file: String,
    pub num_threads: usize,
    pub progress_verbose: bool,
    pub progress_step: usize,
    pub k_nearest: usize,
    pub print_matrix: bool,
}


impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using parameters:
        corpus_file: {}
        num_threads: {}
        progress_verbose: {}
        progress_step: {}
        k_nearest: {}
        print_matrix: {}",
        self.corpus_file, self.num_threads, self.progress_verbose, self.progress_step, self.k_nearest, self.print_matrix)
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        return self.params.clone()
    }

    /// Reads the JSON file given as the single program argument.
    pub fn new(args: &[String]) -> Result<Config> {

        if args.len() != 2 {
            return Err(Error::Config("input should be a path to json file only".to_string()));
        }

        let f = BufReader::new(File::open(&args[1])?);
        let json: Value = serde_json::from_reader(f)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config> {

        // the corpus file is the only mandatory entry
        let corpus_file = match json.get("corpus_file") {
            Some(Value::String(corpus_file)) => corpus_file.to_owned(),
            Some(_) => return Err(Error::Config("corpus_file must be a string".to_string())),
            None => return Err(Error::Config("corpus_file was not supplied through json".to_string()))
        };

        // handle default vs input parameters
        let num_threads = get_usize(json, "num_threads", 1)?;
        if num_threads == 0 {
            return Err(Error::Config("num_threads must be positive".to_string()));
        }
        let progress_verbose = get_bool(json, "progress_verbose", true)?;
        let progress_step = get_usize(json, "progress_step", 10)?;
        if progress_step == 0 || progress_step > 100 {
            return Err(Error::Config(format!("progress_step must be a percentage in 1..=100, got {}", progress_step)));
        }
        let k_nearest = get_usize(json, "k_nearest", 0)?;
        let print_matrix = get_bool(json, "print_matrix", true)?;

        let params = JsonTypes {
            corpus_file: corpus_file,
            num_threads: num_threads,
            progress_verbose: progress_verbose,
            progress_step: progress_step,
            k_nearest: k_nearest,
            print_matrix: print_matrix
        };

        Ok (
            Self {
                params: params
            }
        )
    }

}


fn get_usize(json: &Value, key: &str, default: usize) -> Result<usize> {
    match json.get(key) {
        Some(value) => value
        .as_u64()
        .map(|x| x as usize)
        .ok_or_else(|| Error::Config(format!("given {} is not a non-negative integer", key))),
        None => Ok(default)
    }
}

fn get_bool(json: &Value, key: &str, default: bool) -> Result<bool> {
    match json.get(key) {
        Some(value) => value
        .as_bool()
        .ok_or_else(|| Error::Config(format!("given {} is not boolean", key))),
        None => Ok(default)
    }
}


#[cfg(test)]
mod tests {

    use serde_json::json;
    use crate::error::Error;
    use super::Config;

    #[test]
    fn defaults_test() {
        let params = Config::from_json(&json!({"corpus_file": "sessions.json"})).unwrap().get_params();
        assert_eq!(params.corpus_file, "sessions.json");
        assert_eq!(params.num_threads, 1);
        assert!(params.progress_verbose);
        assert_eq!(params.progress_step, 10);
        assert_eq!(params.k_nearest, 0);
        assert!(params.print_matrix);
    }

    #[test]
    fn overrides_test() {
        let json = json!({
            "corpus_file": "sessions.json",
            "num_threads": 4,
            "progress_verbose": false,
            "progress_step": 5,
            "k_nearest": 3,
            "print_matrix": false
        });
        let params = Config::from_json(&json).unwrap().get_params();
        assert_eq!(params.num_threads, 4);
        assert!(!params.progress_verbose);
        assert_eq!(params.progress_step, 5);
        assert_eq!(params.k_nearest, 3);
        assert!(!params.print_matrix);
    }

    #[test]
    fn invalid_values_test() {
        let cases = [
            json!({}),
            json!({"corpus_file": 3}),
            json!({"corpus_file": "c.json", "num_threads": 0}),
            json!({"corpus_file": "c.json", "num_threads": -2}),
            json!({"corpus_file": "c.json", "progress_verbose": "yes"}),
            json!({"corpus_file": "c.json", "progress_step": 101}),
        ];
        for json in cases {
            assert!(matches!(Config::from_json(&json), Err(Error::Config(_))), "{}", json);
        }
    }

    #[test]
    fn wrong_args_test() {
        let args = vec!["seqdist".to_string()];
        assert!(matches!(Config::new(&args), Err(Error::Config(_))));
    }

}
