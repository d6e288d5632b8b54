use anyhow::{Result, bail};
use std::io::{self, BufRead, IsTerminal};
use zeroize::Zeroizing;

pub const SECRET_ENV: &str = "PASSPROBE_SECRET";

/// Read the secret to hash or assess.
///
/// Sources, in order: the `PASSPROBE_SECRET` environment variable, the first
/// line of piped stdin, then an interactive prompt.
pub fn read_secret(prompt: &str) -> Result<Zeroizing<String>> {
    //  PASSPROBE_SECRET="hunter2" passprobe strength
    if let Ok(secret) = std::env::var(SECRET_ENV) {
        if !secret.is_empty() {
            return Ok(Zeroizing::new(secret));
        }
    }

    //  printf "%s" "hunter2" | passprobe hash
    if !io::stdin().is_terminal() {
        let mut buf = Zeroizing::new(String::new());
        io::stdin().lock().read_line(&mut buf)?;
        trim_newline(&mut buf);

        if !buf.is_empty() {
            return Ok(buf);
        }
    }

    if io::stdin().is_terminal() {
        let secret = Zeroizing::new(rpassword::prompt_password(prompt)?);
        if !secret.is_empty() {
            return Ok(secret);
        }
    }

    bail!("no input provided")
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
