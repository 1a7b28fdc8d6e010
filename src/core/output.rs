use crate::domain::model::LookupResult;
use crate::utils::error::Result;
use std::io::Write;

pub fn write_result_line<W: Write>(out: &mut W, result: &LookupResult) -> Result<()> {
    writeln!(out, "{}", result)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_exactly_one_line() {
        let mut out = Vec::new();
        let result = LookupResult {
            top_level_domain: "finance".to_string(),
            business_service: "Payments".to_string(),
        };

        write_result_line(&mut out, &result).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "finance,Payments\n");
    }

    #[test]
    fn test_empty_business_service() {
        let mut out = Vec::new();
        let result = LookupResult {
            top_level_domain: "sports".to_string(),
            business_service: String::new(),
        };

        write_result_line(&mut out, &result).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "sports,\n");
    }
}
