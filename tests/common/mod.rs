use dictionary_fetcher::VecLog;
use dictionary_fetcher::entry::run;
use dictionary_fetcher::error::Result;
use dictionary_fetcher::manifest::DictionaryManifest;
use dictionary_fetcher::world::MockWorld;

pub struct FetchTest {
    pub world: MockWorld,
    pub log: VecLog,
}

impl FetchTest {
    /// Sets up a mock world with the given catalogue and an in-memory log. `cfg_world` adds the
    /// expectations for directory creation, fetching and writing.
    pub fn new(manifest: &'static str, cfg_world: impl FnOnce(&mut MockWorld)) -> Self {
        let log = VecLog::new();
        let mut world = MockWorld::new();
        world.expect_log().return_const(log.clone());
        world
            .expect_manifest()
            .returning(move || DictionaryManifest::parse(manifest));
        cfg_world(&mut world);

        Self { world, log }
    }

    pub async fn run(self) -> RunResult {
        let result = run(self.world).await;
        let log = self.log;
        RunResult { result, log }
    }
}

#[derive(Debug)]
#[must_use]
pub struct RunResult {
    pub result: Result<()>,
    pub log: VecLog,
}

#[derive(Debug)]
#[must_use]
pub struct RunResultLog(VecLog);

impl RunResult {
    pub fn expect_ok(self, msg: &str) -> RunResultLog {
        self.result.as_ref().expect(msg);
        RunResultLog(self.log)
    }

    pub fn expect_err(self, msg: &str) -> RunResultLog {
        self.result.as_ref().expect_err(msg);
        RunResultLog(self.log)
    }
}

impl RunResultLog {
    fn log_eq(output: &str, expected: &str) -> bool {
        let mut output = output.chars();
        let mut expected = expected.chars();

        let mut ch_out = output.next();
        let mut ch_exp = expected.next();
        loop {
            // `expected` is read from a file, and may be checked out by Git using platform-specific
            // line endings. The path separator in expected output is always `/`.
            // `output` is produced at runtime. Rust's `writeln!()` and related macros will always
            // use `\n`, but paths may contain `\\` instead of `/`.
            match (ch_out, ch_exp) {
                (None, None) => return true,
                (None, Some(_)) | (Some(_), None) => return false,
                (Some(a), Some(b)) if a == b => {}
                // the difference is a path separator
                // (or a false positive, but we accept this possibility)
                (Some('\\'), Some('/')) => {}
                // the difference is a line separator
                (Some('\n'), Some('\r')) => {
                    let ch_exp = expected.next();
                    if ch_exp != Some('\n') {
                        return false;
                    }
                }
                (Some(_), Some(_)) => {
                    return false;
                }
            }

            ch_out = output.next();
            ch_exp = expected.next();
        }
    }

    pub fn expect_log(self, expected: &str) {
        let output = self.0.get_lossy();
        assert!(
            Self::log_eq(&output, expected),
            "{output}\nnot equal to\n\n{expected}"
        );
    }
}

/// Checks a log produced outside of [FetchTest], e.g. by driving a fetcher directly.
pub fn expect_log(log: &VecLog, expected: &str) {
    RunResultLog(log.clone()).expect_log(expected);
}
