use std::env;

/// Capability tiers of the host case API, ordered from poorest to richest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CaseApi {
    Simple,
    Full,
}

impl CaseApi {
    fn from_features() -> Self {
        if env::var_os("CARGO_FEATURE_SIMPLE_CASE_API").is_some() {
            CaseApi::Simple
        } else {
            CaseApi::Full
        }
    }

    // Anything that can't do full mapping is built as "simple" and gets the adapter.
    fn cfg_value(self) -> &'static str {
        if self >= CaseApi::Full { "full" } else { "simple" }
    }
}

fn main() {
    pyo3_build_config::use_pyo3_cfgs();

    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rustc-check-cfg=cfg(py_sys_config, values(\"Py_GIL_DISABLED\"))");
    println!("cargo::rustc-check-cfg=cfg(case_api, values(\"simple\", \"full\"))");

    let case_api = CaseApi::from_features();
    println!("cargo::rustc-cfg=case_api=\"{}\"", case_api.cfg_value());

    let config = pyo3_build_config::get();
    println!("cargo:warning=Python version: {:?}", config.version);
    println!("cargo:warning=Case API: {:?}", case_api);
}
