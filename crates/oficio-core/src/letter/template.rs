//! Fixed text of the carrier data request letter.

use chrono::{Datelike, NaiveDate};

/// Portuguese month names, indexed by `month - 1`.
pub const MONTHS_PT: [&str; 12] = [
    "JANEIRO",
    "FEVEREIRO",
    "MARÇO",
    "ABRIL",
    "MAIO",
    "JUNHO",
    "JULHO",
    "AGOSTO",
    "SETEMBRO",
    "OUTUBRO",
    "NOVEMBRO",
    "DEZEMBRO",
];

pub const SALUTATION: &str = "Senhor Gerente:";

pub const REQUEST_PARAGRAPH: &str = "Cumprimentando V. Sa., tendo em vista a apuração de crimes ocorridos na área de circunscrição desta Delegacia de Polícia Distrital, conforme Boletins infra especificados, visando identificar e localizar a autoria delitiva, e em especial atenção ao disposto no Art. 17-B da Lei 9.613/1998, venho, através do presente, REQUISITAR, no prazo máximo de 10 dias, que nos informe os dados cadastrais das linhas infra especificadas.";

pub const TABLE_HEADER: [&str; 3] = ["BOLETIM DE OCORRÊNCIA", "IMEI", "PESQUISAR A PARTIR DE"];

pub const WARNING_PARAGRAPH: &str = "Informamos que o descumprimento injustificado do presente expediente resultará na responsabilização por crime de desobediência, na forma do art. 330 do Código Penal Brasileiro, e para tanto aguardamos resposta no prazo de 10 dias a contar da data do recebimento deste.";

pub const STATUTE_PARAGRAPH: &str = "Art. 17-B. A autoridade policial e o Ministério Público terão acesso, exclusivamente, aos dados cadastrais do investigado que informam qualificação pessoal, filiação e endereço, independentemente de autorização judicial, mantidos pela Justiça Eleitoral, pelas empresas telefônicas, pelas instituições financeiras, pelos provedores de internet e pelas administradoras de cartão de crédito.";

pub const CLOSING: &str = "Atenciosamente,";

pub const SIGNATURE_LINE: &str = "_________________________________________";

pub const ADDRESSEE_PREFIX: &str = "A";

/// Upper-case Portuguese name of a month (1-12).
pub fn month_name(month: u32) -> &'static str {
    MONTHS_PT[(month as usize).saturating_sub(1) % 12]
}

/// `{city}, {day} de {MONTH} de {year}.` with an unpadded day.
pub fn date_line(city: &str, date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}.",
        city,
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "JANEIRO");
        assert_eq!(month_name(3), "MARÇO");
        assert_eq!(month_name(12), "DEZEMBRO");
    }

    #[test]
    fn test_date_line() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(date_line("Manaus/AM", date), "Manaus/AM, 7 de MARÇO de 2025.");
    }
}
