use super::*;
use crate::solver::core::traits::InfoPrint;
use std::io::Write;
use std::time::Duration;

macro_rules! expformat {
    ($fmt:expr,$val:expr) => {
        if $val.is_finite() {
            _exp_str_reformat(format!($fmt, $val))
        } else {
            format!($fmt, $val)
        }
    };
}

const RULE: &str = "-------------------------------------------------------------";

impl InfoPrint for SpgInfo {
    type SE = SpgSettings;

    fn print_configuration(
        &self,
        out: &mut dyn Write,
        settings: &SpgSettings,
        shape: &[usize],
        precision: usize,
    ) -> std::io::Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "        spgopt v{}  -  Spectral Projected Gradient",
            crate::VERSION
        )?;
        writeln!(out, "{RULE}")?;

        let numel: usize = shape.iter().product();
        writeln!(out, "\nproblem:")?;
        writeln!(out, "  variables     = {numel}, shape = {shape:?}")?;
        writeln!(out, "  precision     = {precision} bit")?;

        writeln!(out, "\nsettings:")?;
        let linesearch = if settings.mem > 1 {
            "nonmonotone"
        } else {
            "monotone"
        };
        writeln!(
            out,
            "  line search: {linesearch}, mem = {}, eta = {}",
            settings.mem,
            expformat!("{:.1e}", settings.eta)
        )?;
        writeln!(
            out,
            "  eps1 = {}, eps2 = {}, eps3 = {}",
            expformat!("{:.1e}", settings.eps1),
            expformat!("{:.1e}", settings.eps2),
            expformat!("{:.1e}", settings.eps3)
        )?;
        writeln!(
            out,
            "  max iter = {}, max eval = {}",
            _limit_str(settings.maxit),
            _limit_str(settings.maxfc)
        )?;
        writeln!(out)?;
        Ok(())
    }

    fn print_status_header(&self, out: &mut dyn Write) -> std::io::Result<()> {
        //print a subheader for the iterations info
        write!(out, " iter  ")?;
        write!(out, " eval  ")?;
        write!(out, " proj  ")?;
        write!(out, "    f(x)         ")?;
        write!(out, "  |pg|_2    ")?;
        write!(out, " |pg|_inf ")?;
        writeln!(out)?;
        writeln!(out, "{RULE}")?;
        Ok(())
    }

    fn print_status(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let marker = if self.is_best() { '*' } else { ' ' };

        write!(out, "{:>5}  ", self.iterations)?;
        write!(out, "{:>5}  ", self.evaluations)?;
        write!(out, "{:>5} ", self.projections)?;
        write!(out, "{marker}")?;
        write!(out, "{}  ", expformat!("{:+.8e}", self.f))?;
        write!(out, "{}  ", expformat!("{:.3e}", self.pgnorm2))?;
        write!(out, "{}", expformat!("{:.3e}", self.pgnorminf))?;
        writeln!(out)?;
        Ok(())
    }

    fn print_footer(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{RULE}")?;
        writeln!(
            out,
            "Terminated with status = {} ({})",
            self.status,
            self.status.reason()
        )?;
        writeln!(out, "best f(x)  = {}", expformat!("{:+.8e}", self.fbest))?;
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        out.flush()?;
        Ok(())
    }
}

/// Default progress report: a header at iteration zero followed by
/// one fixed width line per iteration.
pub fn default_report(out: &mut dyn Write, info: &SpgInfo) -> std::io::Result<()> {
    if info.iterations == 0 {
        info.print_status_header(out)?;
    }
    info.print_status(out)
}

fn _limit_str(limit: u32) -> String {
    if limit == u32::MAX {
        "Inf".to_string()
    } else {
        limit.to_string()
    }
}

// convert a string in LowerExp display format into one that
// 1) always has a sign after the exponent, and
// 2) has at least two digits in the exponent.

fn _exp_str_reformat(mut thestr: String) -> String {
    let Some(eidx) = thestr.find('e') else {
        return thestr;
    };
    let has_sign = thestr.chars().nth(eidx + 1) == Some('-');

    let has_short_exp = {
        if !has_sign {
            thestr.len() == eidx + 2
        } else {
            thestr.len() == eidx + 3
        }
    };

    let chars = match (has_sign, has_short_exp) {
        (false, true) => "+0",
        (false, false) => "+",
        (true, true) => "0",
        (true, false) => "",
    };

    let shift = if has_sign { 2 } else { 1 };
    thestr.insert_str(eidx + shift, chars);
    thestr
}

#[test]
fn test_exp_str_reformat() {
    assert_eq!(_exp_str_reformat(format!("{:.1e}", 1e-6)), "1.0e-06");
    assert_eq!(_exp_str_reformat(format!("{:.1e}", 1.0)), "1.0e+00");
    assert_eq!(_exp_str_reformat(format!("{:+.2e}", 2.5e12)), "+2.50e+12");
    assert_eq!(_exp_str_reformat(format!("{:.2e}", 3e-120)), "3.00e-120");
}

#[test]
fn test_default_report() {
    let mut info = SpgInfo {
        f: 2.0,
        fbest: 2.0,
        pgnorminf: 0.5,
        pgnorm2: 0.75,
        evaluations: 1,
        projections: 2,
        ..SpgInfo::default()
    };

    let mut buf: Vec<u8> = Vec::new();
    default_report(&mut buf, &info).unwrap();
    info.iterations = 1;
    info.f = 3.0;
    default_report(&mut buf, &info).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("|pg|_inf"));
    assert!(lines[2].contains("*+2.00000000e+00"));
    assert!(lines[2].contains("7.500e-01"));
    assert!(lines[3].contains(" +3.00000000e+00"));
    assert!(!lines[3].contains('*'));
}
