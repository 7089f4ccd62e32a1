use prelo_core::reference::{FieldSet, Reference};
use prelo_core::schema;
use prelo_core::types::MaterialType;

/// A plausible value for a schema field, distinctive enough to be located
/// in formatted output.
pub fn sample_value(field: &str) -> String {
    match field {
        "autor" | "autor_obra" | "diretor" => "Silva, Ana; Ferreira, Roberto".to_string(),
        "titulo" => "Obra de Exemplo".to_string(),
        "titulo_obra" => "Coletânea Brasileira".to_string(),
        "cidade" => "São Paulo".to_string(),
        "editora" => "Editora Horizonte".to_string(),
        "gravadora" => "Gravadora Lua".to_string(),
        "produtora" => "Produtora Sol".to_string(),
        "instituicao" => "Universidade de Campinas".to_string(),
        "fabricante" => "Casa de Software".to_string(),
        "periodico" => "Revista de Letras".to_string(),
        "fonte" => "Diário Oficial da União".to_string(),
        // Stored uppercase, as NBR 6023 renders jurisdiction entries.
        "jurisdicao" => "BRASIL".to_string(),
        "ano" => "2023".to_string(),
        "mes" => "mar.".to_string(),
        "data" => "19 fev. 1998".to_string(),
        "data_concessao" => "4 jun. 2001".to_string(),
        "volume" => "12".to_string(),
        "numero" => "3".to_string(),
        "paginas" => "45-60".to_string(),
        "folhas" => "120".to_string(),
        "edicao" => "2. ed".to_string(),
        "versao" => "3.1".to_string(),
        "isbn" => "978-85-0000-000-0".to_string(),
        "doi" => "10.1000/xyz123".to_string(),
        "url" => "https://exemplo.com.br/obra".to_string(),
        "acesso" => "1 jan. 2024".to_string(),
        "escala" => "1:100.000".to_string(),
        "duracao" => "112 min".to_string(),
        "tipo" => "Dissertação (Mestrado em Letras)".to_string(),
        "interprete" => "Coral da Cidade".to_string(),
        other => format!("Exemplo de {other}"),
    }
}

/// A reference with every required field of the material type filled.
pub fn complete_reference(material: MaterialType) -> Reference {
    let mut fields = FieldSet::new();
    for name in schema::required_fields(material) {
        fields.insert(name.to_string(), sample_value(name));
    }
    Reference::new(material, fields)
}

/// A reference with required and optional fields filled.
pub fn full_reference(material: MaterialType) -> Reference {
    let mut reference = complete_reference(material);
    for name in schema::optional_fields(material) {
        reference
            .fields
            .insert(name.to_string(), sample_value(name));
    }
    reference
}
