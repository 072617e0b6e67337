//! Votações: votações ocorridas, votos individuais e orientações de bancada.
//!
//! O identificador de uma votação não é numérico (e.g. `2265603-43`), por
//! isso o parâmetro de caminho é textual.

use crate::route::{PathParam, QueryParam, Route};

pub(crate) static ROUTES: &[Route] = &[
    Route {
        path: "/votacoes",
        upstream_path: "votacoes",
        category: "Votações",
        description: "Retorna uma lista de informações básicas sobre as votações ocorridas.",
        path_params: &[],
        query_params: &[
            QueryParam::text("dataInicio"),
            QueryParam::text("dataFim"),
            QueryParam::int("idProposicao"),
        ],
    },
    Route {
        path: "/votacoes/{id}",
        upstream_path: "votacoes/{id}",
        category: "Votações",
        description: "Retorna informações detalhadas sobre uma votação específica.",
        path_params: &[PathParam::text("id")],
        query_params: &[],
    },
    Route {
        path: "/votacoes/{id}/votos",
        upstream_path: "votacoes/{id}/votos",
        category: "Votações",
        description: "Retorna como cada parlamentar votou em uma votação.",
        path_params: &[PathParam::text("id")],
        query_params: &[],
    },
    Route {
        path: "/votacoes/{id}/orientacoes",
        upstream_path: "votacoes/{id}/orientacoes",
        category: "Votações",
        description: "O voto recomendado pelas lideranças.",
        path_params: &[PathParam::text("id")],
        query_params: &[],
    },
];
