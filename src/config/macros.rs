macro_rules! extract_option_single {
    (
        $line: ident,
        $identifier: ident,
        $option: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::str_extract_value($identifier, $line);
            $option = Some(value.to_string());
            continue;
        }
    };
}

macro_rules! extract_number {
    (
        $line: ident,
        $identifier: ident,
        $option: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::str_extract_value($identifier, $line);
            let number = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: $identifier.trim_end_matches(':').to_string(),
                value: value.to_string(),
            })?;
            $option = Some(number);
            continue;
        }
    };
}
