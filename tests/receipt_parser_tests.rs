#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use pantry::receipt_parser::{
        extract_purchase_date, extract_store_name, parse_document, parse_line, parse_receipt,
        ReceiptParser, ReceiptParserConfig,
    };

    #[test]
    fn test_noise_keyword_as_whole_name_is_rejected() {
        for line in [
            "TOTAL 15.56",
            "TAX  0.84",
            "subtotal  14.72",
            "Visa  15.56",
            "CHANGE  4.44",
        ] {
            assert!(parse_line(line).is_none(), "expected '{}' to be noise", line);
        }
    }

    #[test]
    fn test_noise_keyword_prefix_keeps_item() {
        let item = parse_line("TOTAL FAGE GREEK YOGURT 1.29").unwrap();
        assert_eq!(item.name, "Total Fage Greek Yogurt");
        assert_eq!(item.price, Some(1.29));
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, "item");
    }

    #[test]
    fn test_quantity_and_unit_tokens() {
        let cases = [
            ("BANANAS  1.2 LB  0.89", "Bananas", 1.2, "lb", 0.89),
            ("GROUND BEEF  2 lb  9.98", "Ground Beef", 2.0, "lb", 9.98),
            ("LARGE EGGS  1 DZ  3.49", "Large Eggs", 1.0, "dz", 3.49),
            ("CHEDDAR  8 OZ  4.29", "Cheddar", 8.0, "oz", 4.29),
            ("Whole Milk  1 GAL  4.19", "Whole Milk", 1.0, "gal", 4.19),
        ];

        for (line, name, quantity, unit, price) in cases {
            let item = parse_line(line).unwrap();
            assert_eq!(item.name, name, "name for '{}'", line);
            assert_eq!(item.quantity, quantity, "quantity for '{}'", line);
            assert_eq!(item.unit, unit, "unit for '{}'", line);
            assert_eq!(item.price, Some(price), "price for '{}'", line);
        }
    }

    #[test]
    fn test_lines_without_price_are_rejected() {
        assert!(parse_line("ORGANIC MILK").is_none());
        assert!(parse_line("ORGANIC MILK 3.9").is_none());
        assert!(parse_line("").is_none());
        assert!(parse_line("  3.99").is_none());
    }

    #[test]
    fn test_date_only_line_is_rejected() {
        assert!(parse_line("01/15/2026").is_none());
        assert!(parse_line("3-5-26").is_none());
    }

    #[test]
    fn test_zero_quantity_falls_back_to_one() {
        let item = parse_line("APPLES  0 LB  2.50").unwrap();
        assert_eq!(item.name, "Apples");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, "lb");
    }

    #[test]
    fn test_name_and_price_reparse() {
        for name in ["Sourdough Bread", "Peanut Butter", "Oat Milk"] {
            let line = format!("{}  {}.00", name.to_uppercase(), 4);
            let item = parse_line(&line).unwrap();
            assert_eq!(item.name, name);
            assert_eq!(item.price, Some(4.0));
        }
    }

    #[test]
    fn test_parse_document_header_only() {
        assert!(parse_document("WHOLE FOODS MARKET").is_empty());
        assert!(parse_document("").is_empty());
        assert!(parse_document("\n\n   \n").is_empty());
    }

    #[test]
    fn test_parse_document_single_item() {
        let items = parse_document("HEADER\nMilk  3.99");
        assert_eq!(items.len(), 1);
        assert!(items[0].name.contains("Milk"));
        assert_eq!(items[0].price, Some(3.99));
    }

    #[test]
    fn test_parse_document_skips_header_even_if_it_has_a_price() {
        let items = parse_document("SNACK BAR  1.99\nCRACKERS  2.49");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Crackers");
    }

    #[test]
    fn test_full_receipt() {
        let text = r#"
            TRADER JOE'S #552
            123 MAIN ST
            06/10/26  14:02

            BANANAS  1.2 LB  0.89
            ORGANIC WHOLE MILK  4.99
            TOTAL FAGE GREEK YOGURT  1.29
            SUBTOTAL  7.17
            TAX  0.00
            TOTAL  7.17
            VISA  7.17
            THANK YOU
        "#;

        let receipt = parse_receipt(text);
        assert_eq!(receipt.store_name.as_deref(), Some("TRADER JOE'S #552"));
        assert_eq!(receipt.purchase_date.unwrap().year(), 2026);

        let names: Vec<&str> = receipt.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Bananas", "Organic Whole Milk", "Total Fage Greek Yogurt"]
        );
    }

    #[test]
    fn test_extract_purchase_date_variants() {
        assert_eq!(
            extract_purchase_date("STORE\n06/10/26"),
            NaiveDate::from_ymd_opt(2026, 6, 10)
        );
        assert_eq!(
            extract_purchase_date("Date: 12-24-2025 09:15"),
            NaiveDate::from_ymd_opt(2025, 12, 24)
        );
        assert_eq!(extract_purchase_date("no dates here"), None);
        assert_eq!(extract_purchase_date("13/45/2026"), None);
    }

    #[test]
    fn test_extract_store_name_skips_numeric_lines() {
        assert_eq!(
            extract_store_name("\n  12:30  \n06/10/26\n  Corner Grocer \nMilk 1.99").as_deref(),
            Some("Corner Grocer")
        );
        assert_eq!(extract_store_name("12/01/26\n0000"), None);
    }

    #[test]
    fn test_parser_line_cap() {
        let parser = ReceiptParser::with_config(ReceiptParserConfig {
            max_lines: Some(3),
            ..Default::default()
        });

        let items = parser.parse_document("STORE\nMilk  3.99\nEggs  4.49\nBread  2.99");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "Eggs");
    }

    #[test]
    fn test_parser_extra_noise_keywords() {
        let parser = ReceiptParser::with_config(ReceiptParserConfig {
            extra_noise_keywords: vec!["  bag fee ".to_string(), String::new()],
            ..Default::default()
        });

        assert!(parser.parse_line("BAG FEE  0.10").is_none());
        assert!(parser.parse_line("BAG FEE WAIVED SNACK  0.10").is_some());
        assert!(parser.parse_line("TOTAL  0.10").is_none());
    }
}
