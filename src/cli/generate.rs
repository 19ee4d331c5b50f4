use crate::cli::commands::GenerateArgs;
use crate::config::AppConfig;
use crate::errors::ShaderGenError;
use crate::shader::ShaderGenerator;

pub async fn handle_generate(args: GenerateArgs) -> Result<(), ShaderGenError> {
    let config = AppConfig::new(args.api.api_key).with_api_base(&args.api.api_base);
    let generator = ShaderGenerator::from_config(&config)?;
    let code = generator.generate(&args.prompt).await?;
    println!("{}", code);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::ApiArgs;

    #[tokio::test]
    async fn test_generate_without_key_is_config_error() {
        let args = GenerateArgs {
            prompt: "a pulsing red circle".into(),
            api: ApiArgs { api_key: None, api_base: "http://127.0.0.1:9/v1".into() },
        };
        let err = handle_generate(args).await.unwrap_err();
        assert!(matches!(err, ShaderGenError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
