//! Plain-text rendering of a Kunda chart and its rectification report.

use std::io::{self, Write};

use kunda_vedic_base::{
    KundaChart, LagnaPosition, RectificationReport, SignOrigin, rectified_lagna,
};

const CORRECT_VERDICT: &str = "Kunda is correctly placed within the target signs.";
const RECTIFY_VERDICT: &str = "Kunda is not correctly placed and needs rectification. \
Try adjusting the D-81 with the possible Lagnas or choose the closest degree in the table above.";

/// Write the full report for one Lagna.
pub fn write_report<W: Write>(
    out: &mut W,
    chart: &KundaChart,
    report: &RectificationReport,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Calculation Steps ---")?;
    writeln!(out, "1. Input Lagna: {}", describe_lagna(&chart.lagna))?;
    writeln!(out, "2. Lagna Decimal Degrees: {:.6}", chart.lagna_longitude)?;

    let targets: Vec<&str> = report.target_rashis().iter().map(|r| r.code()).collect();
    writeln!(
        out,
        "Possible Kunda placements for this Lagna: {}",
        targets.join(", ")
    )?;
    let kunda_sign = chart.kunda.rashi().map_or("n/a", |r| r.code());
    writeln!(
        out,
        "3. Kunda Degrees: {:.6} ({kunda_sign})",
        chart.kunda.longitude
    )?;

    write_adjustments(out, report)?;
    write_verdict(out, chart, report)
}

/// `LI 14°14'9''`, plus a note when the sign was not given explicitly.
pub fn describe_lagna(lagna: &LagnaPosition) -> String {
    let base = format!(
        "{} {:.0}°{:.0}'{:.0}''",
        lagna.rashi.code(),
        lagna.degrees,
        lagna.minutes,
        lagna.seconds
    );
    match &lagna.origin {
        SignOrigin::Explicit => base,
        SignOrigin::Defaulted => format!("{base} (no sign given, Mesha assumed)"),
        SignOrigin::Fallback(code) => {
            format!("{base} (unrecognized sign '{code}', Mesha assumed)")
        }
    }
}

fn write_adjustments<W: Write>(out: &mut W, report: &RectificationReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Rectification Adjustments ---")?;
    writeln!(out, "Target Sign | Degree Adjustment | Time Adjustment")?;
    writeln!(out, "------------|-------------------|-----------------")?;
    for (window, adj) in report.adjustments() {
        writeln!(
            out,
            "{:<12}| {:<17.4}| {:<17} minutes and {} seconds",
            window.rashi.code(),
            adj.lagna_deg,
            adj.whole_minutes(),
            adj.whole_seconds()
        )?;
    }
    Ok(())
}

fn write_verdict<W: Write>(
    out: &mut W,
    chart: &KundaChart,
    report: &RectificationReport,
) -> io::Result<()> {
    writeln!(out)?;
    if report.is_kunda_correct {
        return writeln!(out, "{CORRECT_VERDICT}");
    }
    writeln!(out, "{RECTIFY_VERDICT}")?;
    let nearest = report
        .nearest()
        .and_then(|(window, adj)| Some((window, adj, rectified_lagna(&chart.lagna, adj)?)));
    if let Some((window, adj, moved)) = nearest {
        writeln!(
            out,
            "Nearest target: {} (+{} minutes and {} seconds), rectified Lagna {} {}°{}'{:.0}''",
            window.rashi.code(),
            adj.whole_minutes(),
            adj.whole_seconds(),
            moved.rashi.code(),
            moved.dms.degrees,
            moved.dms.minutes,
            moved.dms.seconds
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kunda_vedic_base::{KundaConfig, analyze};

    fn render(input: &str) -> String {
        let (chart, report) = analyze(input, &KundaConfig::default()).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, &chart, &report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tula_report_lines() {
        let text = render("Li,14,14,9");
        assert!(text.contains("1. Input Lagna: LI 14°14'9''\n"), "{text}");
        assert!(text.contains("2. Lagna Decimal Degrees: 194.235833\n"), "{text}");
        assert!(text.contains("Possible Kunda placements for this Lagna: LI, AQ, AR, GE\n"));
        assert!(text.contains("3. Kunda Degrees: 253.102500 (SA)\n"), "{text}");
        assert!(text.contains(RECTIFY_VERDICT));
    }

    #[test]
    fn tula_table_rows_in_house_order() {
        let text = render("Li,14,14,9");
        let rows: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("------------|"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(
            rows,
            vec![
                "LI          | 3.7271           | 223               minutes and 37 seconds",
                "AQ          | 0.7642           | 45                minutes and 51 seconds",
                "AR          | 1.5049           | 90                minutes and 17 seconds",
                "GE          | 2.2456           | 134               minutes and 44 seconds",
            ]
        );
    }

    #[test]
    fn nearest_target_suggested() {
        let text = render("Li,14,14,9");
        assert!(
            text.contains("Nearest target: AQ (+45 minutes and 51 seconds), rectified Lagna LI 15°0'"),
            "{text}"
        );
    }

    #[test]
    fn rectified_lagna_not_a_second_short() {
        let text = render("TA,0,23,0");
        assert!(
            text.contains("Nearest target: TA (+76 minutes and 59 seconds), rectified Lagna TA 1°40'0''"),
            "{text}"
        );
    }

    #[test]
    fn nan_lagna_reports_nan_without_suggestion() {
        let text = render("NaN,0,0");
        assert!(text.contains("3. Kunda Degrees: NaN (n/a)\n"), "{text}");
        assert!(
            text.contains("AR          | NaN              | NaN               minutes and NaN seconds"),
            "{text}"
        );
        assert!(text.contains(RECTIFY_VERDICT));
        assert!(!text.contains("Nearest target"), "{text}");
    }

    #[test]
    fn infinite_degrees_report_nan_kunda() {
        let text = render("Li,inf,0,0");
        assert!(text.contains("2. Lagna Decimal Degrees: inf\n"), "{text}");
        assert!(text.contains("3. Kunda Degrees: NaN (n/a)\n"), "{text}");
        assert!(!text.contains("Nearest target"), "{text}");
    }

    #[test]
    fn correct_chart_has_no_suggestion() {
        let text = render("AR,15,0,0");
        assert!(text.contains(CORRECT_VERDICT));
        assert!(!text.contains("Nearest target"));
        assert!(!text.contains("LE          |"));
    }

    #[test]
    fn defaulted_sign_noted() {
        let (chart, _) = analyze("14,14,9", &KundaConfig::default()).unwrap();
        assert_eq!(
            describe_lagna(&chart.lagna),
            "AR 14°14'9'' (no sign given, Mesha assumed)"
        );
    }

    #[test]
    fn fallback_sign_noted() {
        let (chart, _) = analyze("xy,1,2,3", &KundaConfig::default()).unwrap();
        assert_eq!(
            describe_lagna(&chart.lagna),
            "AR 1°2'3'' (unrecognized sign 'XY', Mesha assumed)"
        );
    }
}
