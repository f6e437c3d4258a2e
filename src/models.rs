//! Wire models for the class-management backend.
//!
//! The backend speaks Portuguese field names; Rust-side names are English
//! with serde renames so the wire contract stays byte-compatible.

use serde::{Deserialize, Serialize};

/// A tracked student as returned by `GET /alunos`.
///
/// `average` is computed server-side and is read-only from the client's
/// perspective; it is never recomputed or patched locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "notas")]
    pub grades: Vec<f64>,
    #[serde(rename = "frequencia")]
    pub attendance: f64,
    #[serde(rename = "media")]
    pub average: f64,
}

/// Class-wide aggregates from `GET /estatisticas/media-turma`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStatistics {
    #[serde(rename = "media_geral")]
    pub class_average: f64,
    #[serde(rename = "medias_por_disciplina")]
    pub subject_averages: Vec<f64>,
}

/// One flagged student with the backend's free-text reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionStudent {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "motivos")]
    pub reasons: Vec<String>,
}

/// Envelope of `GET /estatisticas/alunos-atencao`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionReport {
    #[serde(rename = "alunos_atencao_especial")]
    pub students: Vec<AttentionStudent>,
}

/// Full report from `GET /relatorio-completo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    #[serde(rename = "total_alunos")]
    pub total_students: usize,
    #[serde(rename = "medias_por_disciplina")]
    pub subject_averages: Vec<f64>,
    #[serde(rename = "media_geral_turma")]
    pub class_average: f64,
    #[serde(rename = "frequencia_media_turma")]
    pub average_attendance: f64,
    #[serde(rename = "alunos")]
    pub students: Vec<Student>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// The student list decodes from the backend's Portuguese field names.
    fn student_list_decodes_from_wire_names() {
        let body = r#"[
            {"nome": "Ana", "notas": [7.0, 8.0, 6.0, 9.0, 5.0], "frequencia": 80.0, "media": 7.0},
            {"nome": "Bruno", "notas": [0.0, 0.0, 0.0, 0.0, 0.0], "frequencia": 0.0, "media": 0.0}
        ]"#;

        let students: Vec<Student> = serde_json::from_str(body).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "Ana");
        assert_eq!(students[0].grades, vec![7.0, 8.0, 6.0, 9.0, 5.0]);
        assert_eq!(students[0].attendance, 80.0);
        assert_eq!(students[0].average, 7.0);
    }

    #[test]
    /// Statistics decode, and extra fields the server may add are ignored.
    fn statistics_decode_ignoring_unknown_fields() {
        let body = r#"{
            "media_geral": 6.5,
            "medias_por_disciplina": [6.0, 7.0, 6.5, 6.0, 7.0]
        }"#;

        let stats: ClassStatistics = serde_json::from_str(body).unwrap();
        assert_eq!(stats.class_average, 6.5);
        assert_eq!(stats.subject_averages.len(), 5);
    }

    #[test]
    /// The attention report carries the flagged students and their reasons;
    /// the spread-in student fields from the backend are ignored.
    fn attention_report_decodes() {
        let body = r#"{
            "media_turma": 6.5,
            "quantidade": 1,
            "alunos_atencao_especial": [
                {"nome": "Bruno", "notas": [0,0,0,0,0], "frequencia": 50.0, "media": 0.0,
                 "motivos": ["Frequência baixa: 50.0%", "Média abaixo da turma: 0.00"]}
            ]
        }"#;

        let report: AttentionReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.students.len(), 1);
        assert_eq!(report.students[0].name, "Bruno");
        assert_eq!(report.students[0].reasons.len(), 2);
    }
}
