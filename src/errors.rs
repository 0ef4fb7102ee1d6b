use thiserror::Error;

/// Erros possíveis durante o parsing e a análise de extratos bancários
#[derive(Error, Debug)]
pub enum StatementParseError {
    /// Falha genérica durante o parsing do conteúdo (detalhe na mensagem)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// Erro ao ler o conteúdo do arquivo do disco
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// O builder foi chamado sem fornecer conteúdo nem caminho de arquivo
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// O formato precisa ser escolhido explicitamente (não há auto-detecção)
    #[error("File format is required")]
    MissingFormat,

    // ── Erros específicos de formatos ───────────────────────────────────────────

    /// Cabeçalho CSV sem nenhuma das colunas obrigatórias
    #[error("CSV header has none of the required columns (found: {0})")]
    MissingColumns(String),

    /// Conteúdo QIF sem nenhum terminador de registro `^`
    #[error("QIF content has no record terminator")]
    MissingTerminator,

    /// Falha ao exportar o resultado como JSON
    #[error("Failed to serialize statement: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type StatementResult<T> = Result<T, StatementParseError>;
