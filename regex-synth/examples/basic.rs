use regex_synth::{
    dsl::*,
    synth::{matched_groups, Flags, RegexSynth},
    Expression,
};

fn main() -> Result<(), regex_synth::Error> {
    env_logger::init();

    // Dates like 2019-Mar-15, from 2012 to 2020
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let date = RegexSynth::new(&[&exact_line_match(&[
        &integer_range(2012, 2020)?,
        &literal("-"),
        &named_capture_group("month", &[&either_strings(months)])?,
        &literal("-"),
        &named_capture_group("day", &[&leading_zero(integer_range(1, 31)?)])?,
    ])]);
    println!("{date}");

    let re = date.compile(Flags::empty())?;
    assert!(re.is_match("2019-Mar-15"));
    assert!(!re.is_match("2019-Mar-32"));
    println!("{:?}", matched_groups(&re, "2019-Mar-05"));

    // Sub-domains of a URL
    let mut sub_domain = alphanumeric();
    sub_domain.union(&simple_set(['-', '.']));
    let url = concat(&[
        &named_capture_group("protocol", &[&either_strings(["http", "https", "ftp"])])?,
        &literal("://"),
        &named_capture_group("subDomain", &[&one_or_more(sub_domain)])?,
    ]);
    println!("{}", url.to_regex());

    Ok(())
}
