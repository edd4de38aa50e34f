//! Command line front end: collect the fields, check them, print the result.

use crate::config::InputFields;
use crate::output::{describe_host, render_json, render_terminal};
use crate::processing::Lang;
use clap::Parser;
use std::error::Error;
use std::io::Write;

/// Check that two hosts and a gateway form a working IPv4 network.
#[derive(Parser, Debug, Default)]
#[command(name = "network-config-checker", version)]
pub struct Args {
    /// IP address of machine 1
    #[arg(long)]
    pub ip1: Option<String>,

    /// Subnet mask of machine 1, dotted-quad
    #[arg(long)]
    pub mask1: Option<String>,

    /// IP address of machine 2
    #[arg(long)]
    pub ip2: Option<String>,

    /// Subnet mask of machine 2, dotted-quad
    #[arg(long)]
    pub mask2: Option<String>,

    /// Gateway IP address
    #[arg(long)]
    pub gateway: Option<String>,

    /// JSON file with host1, host2 and gateway
    #[arg(short, long)]
    pub config: Option<String>,

    /// Message language (en, pt)
    #[arg(short, long)]
    pub lang: Option<Lang>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Debug logging and per host network summary
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn fields(&self) -> InputFields {
        InputFields {
            ip1: self.ip1.clone(),
            mask1: self.mask1.clone(),
            ip2: self.ip2.clone(),
            mask2: self.mask2.clone(),
            gateway: self.gateway.clone(),
            lang: self.lang,
        }
    }
}

/// Run one check and write the result to `out`.
///
/// # Arguments
/// * `args` - Parsed command line
/// * `env` - Fields from the environment, used for anything not given otherwise
/// * `out` - Where the report goes
///
/// # Returns
/// * `Ok(true)` - The configuration is valid
/// * `Ok(false)` - The configuration has problems (already written to `out`)
/// * `Err` - Input could not be collected or output could not be written
pub fn run<W: Write>(args: &Args, env: InputFields, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let mut fields = args.fields();
    if let Some(file) = &args.config {
        fields = fields.or(InputFields::from_file(file)?);
    }
    let fields = fields.or(env);
    let lang = fields.lang.unwrap_or_default();
    let config = fields.into_network_config()?;
    log::debug!("checking {config:?} lang={lang}");

    let report = config.validate(lang);

    if args.json {
        writeln!(out, "{}", render_json(&config, &report)?)?;
        return Ok(report.ok);
    }

    if args.verbose {
        for (label, host) in [("Machine 1", &config.host1), ("Machine 2", &config.host2)] {
            if let Some(line) = describe_host(label, host) {
                writeln!(out, "{line}")?;
            }
        }
    }
    writeln!(out, "{}", render_terminal(&config, &report, lang))?;

    Ok(report.ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "network-config-checker",
            "--ip1",
            "192.168.1.10",
            "--mask1",
            "255.255.255.0",
            "--ip2",
            "192.168.1.20",
            "--mask2",
            "255.255.255.0",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("Error parsing args")
    }

    fn run_to_string(args: &Args, env: InputFields) -> (Result<bool, String>, String) {
        let mut out = Vec::new();
        let result = run(args, env, &mut out).map_err(|e| e.to_string());
        (result, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn test_run_valid_from_flags() {
        let (result, out) = run_to_string(&args(&["--gateway", "192.168.1.1"]), InputFields::default());
        assert_eq!(result, Ok(true));
        assert!(out.contains("Pinging 192.168.1.20 from 192.168.1.10"));
    }

    #[test]
    fn test_run_gateway_from_env() {
        let env = InputFields {
            gateway: Some("192.168.2.1".to_string()),
            lang: Some(Lang::Pt),
            ..Default::default()
        };
        let (result, out) = run_to_string(&args(&[]), env);
        assert_eq!(result, Ok(false));
        assert!(out.contains("Máquina 1: O Gateway não pertence à mesma sub-rede."));
    }

    #[test]
    fn test_run_missing_field() {
        let (result, out) = run_to_string(&args(&[]), InputFields::default());
        assert_eq!(result, Err("Missing input field(s): gateway".to_string()));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_json() {
        let (result, out) = run_to_string(
            &args(&["--gateway", "192.168.1.20", "--json"]),
            InputFields::default(),
        );
        assert_eq!(result, Ok(false));
        let value: serde_json::Value = serde_json::from_str(&out).expect("Error parsing json");
        assert_eq!(value["problems"][0]["rule"], "host2_gateway_conflict");
    }

    #[test]
    fn test_run_verbose_describes_hosts() {
        let (result, out) = run_to_string(
            &args(&["--gateway", "192.168.1.1", "--verbose"]),
            InputFields::default(),
        );
        assert_eq!(result, Ok(true));
        assert!(out.contains("broadcast 192.168.1.255"));
    }

    #[test]
    fn test_bad_lang_flag_rejected() {
        assert!(Args::try_parse_from(["network-config-checker", "--lang", "xx"]).is_err());
    }
}
