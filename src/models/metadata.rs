//! Curated model-type assignments.
//!
//! This module contains the compile-time classification table for models
//! evaluated on the leaderboard. Entries are curated ground truth (model
//! card review, author confirmation), independent of the self-reported
//! `model_type` in request files, and are transcribed verbatim: keys are
//! case-sensitive model identifiers, usually `"<org>/<model-name>"`.

use phf::phf_map;

use crate::models::ModelType;

/// Curated model identifier -> model type table
///
/// Built at compile time; there is no mutation API. Lookups are exact
/// match on the full identifier.
pub static TYPE_METADATA: phf::Map<&'static str, ModelType> = phf_map! {
    "notstoic/PygmalionCoT-7b" => ModelType::InstructionTuned,
    "aisquared/dlite-v1-355m" => ModelType::InstructionTuned,
    "aisquared/dlite-v1-1_5b" => ModelType::InstructionTuned,
    "aisquared/dlite-v1-774m" => ModelType::InstructionTuned,
    "aisquared/dlite-v1-124m" => ModelType::InstructionTuned,
    "aisquared/chopt-2_7b" => ModelType::InstructionTuned,
    "aisquared/dlite-v2-124m" => ModelType::InstructionTuned,
    "aisquared/dlite-v2-774m" => ModelType::InstructionTuned,
    "aisquared/dlite-v2-1_5b" => ModelType::InstructionTuned,
    "aisquared/chopt-1_3b" => ModelType::InstructionTuned,
    "aisquared/dlite-v2-355m" => ModelType::InstructionTuned,
    "augtoma/qCammel-13" => ModelType::InstructionTuned,
    "Aspik101/Llama-2-7b-hf-instruct-pl-lora_unload" => ModelType::InstructionTuned,
    "Aspik101/vicuna-7b-v1.3-instruct-pl-lora_unload" => ModelType::InstructionTuned,
    "TheBloke/alpaca-lora-65B-HF" => ModelType::FineTuned,
    "TheBloke/tulu-7B-fp16" => ModelType::InstructionTuned,
    "TheBloke/guanaco-7B-HF" => ModelType::FineTuned,
    "TheBloke/koala-7B-HF" => ModelType::FineTuned,
    "TheBloke/wizardLM-7B-HF" => ModelType::InstructionTuned,
    "TheBloke/airoboros-13B-HF" => ModelType::InstructionTuned,
    "TheBloke/koala-13B-HF" => ModelType::FineTuned,
    "TheBloke/Wizard-Vicuna-7B-Uncensored-HF" => ModelType::FineTuned,
    "TheBloke/dromedary-65b-lora-HF" => ModelType::InstructionTuned,
    "TheBloke/wizardLM-13B-1.0-fp16" => ModelType::InstructionTuned,
    "TheBloke/WizardLM-13B-V1-1-SuperHOT-8K-fp16" => ModelType::FineTuned,
    "TheBloke/Wizard-Vicuna-30B-Uncensored-fp16" => ModelType::FineTuned,
    "TheBloke/wizard-vicuna-13B-HF" => ModelType::InstructionTuned,
    "TheBloke/UltraLM-13B-fp16" => ModelType::InstructionTuned,
    "TheBloke/OpenAssistant-FT-7-Llama-30B-HF" => ModelType::FineTuned,
    "TheBloke/vicuna-13B-1.1-HF" => ModelType::InstructionTuned,
    "TheBloke/guanaco-13B-HF" => ModelType::FineTuned,
    "TheBloke/guanaco-65B-HF" => ModelType::FineTuned,
    "TheBloke/airoboros-7b-gpt4-fp16" => ModelType::InstructionTuned,
    "TheBloke/llama-30b-supercot-SuperHOT-8K-fp16" => ModelType::InstructionTuned,
    "TheBloke/Llama-2-13B-fp16" => ModelType::Pretrained,
    "TheBloke/llama-2-70b-Guanaco-QLoRA-fp16" => ModelType::FineTuned,
    "TheBloke/landmark-attention-llama7b-fp16" => ModelType::InstructionTuned,
    "TheBloke/Planner-7B-fp16" => ModelType::InstructionTuned,
    "TheBloke/Wizard-Vicuna-13B-Uncensored-HF" => ModelType::FineTuned,
    "TheBloke/gpt4-alpaca-lora-13B-HF" => ModelType::InstructionTuned,
    "TheBloke/gpt4-x-vicuna-13B-HF" => ModelType::InstructionTuned,
    "TheBloke/gpt4-alpaca-lora_mlp-65B-HF" => ModelType::InstructionTuned,
    "TheBloke/tulu-13B-fp16" => ModelType::InstructionTuned,
    "TheBloke/VicUnlocked-alpaca-65B-QLoRA-fp16" => ModelType::InstructionTuned,
    "TheBloke/Llama-2-70B-fp16" => ModelType::InstructionTuned,
    "TheBloke/WizardLM-30B-fp16" => ModelType::InstructionTuned,
    "TheBloke/robin-13B-v2-fp16" => ModelType::FineTuned,
    "TheBloke/robin-33B-v2-fp16" => ModelType::FineTuned,
    "TheBloke/Vicuna-13B-CoT-fp16" => ModelType::InstructionTuned,
    "TheBloke/Vicuna-33B-1-3-SuperHOT-8K-fp16" => ModelType::InstructionTuned,
    "TheBloke/Wizard-Vicuna-30B-Superhot-8K-fp16" => ModelType::FineTuned,
    "TheBloke/Nous-Hermes-13B-SuperHOT-8K-fp16" => ModelType::InstructionTuned,
    "TheBloke/GPlatty-30B-SuperHOT-8K-fp16" => ModelType::FineTuned,
    "TheBloke/CAMEL-33B-Combined-Data-SuperHOT-8K-fp16" => ModelType::InstructionTuned,
    "TheBloke/Chinese-Alpaca-33B-SuperHOT-8K-fp16" => ModelType::InstructionTuned,
    "jphme/orca_mini_v2_ger_7b" => ModelType::InstructionTuned,
    "Ejafa/vicuna_7B_vanilla_1.1" => ModelType::FineTuned,
    "kevinpro/Vicuna-13B-CoT" => ModelType::InstructionTuned,
    "AlekseyKorshuk/pygmalion-6b-vicuna-chatml" => ModelType::FineTuned,
    "AlekseyKorshuk/chatml-pyg-v1" => ModelType::FineTuned,
    "concedo/Vicuzard-30B-Uncensored" => ModelType::FineTuned,
    "concedo/OPT-19M-ChatSalad" => ModelType::FineTuned,
    "concedo/Pythia-70M-ChatSalad" => ModelType::FineTuned,
    "digitous/13B-HyperMantis" => ModelType::InstructionTuned,
    "digitous/Adventien-GPTJ" => ModelType::FineTuned,
    "digitous/Alpacino13b" => ModelType::InstructionTuned,
    "digitous/GPT-R" => ModelType::InstructionTuned,
    "digitous/Javelin-R" => ModelType::InstructionTuned,
    "digitous/Javalion-GPTJ" => ModelType::InstructionTuned,
    "digitous/Javalion-R" => ModelType::InstructionTuned,
    "digitous/Skegma-GPTJ" => ModelType::FineTuned,
    "digitous/Alpacino30b" => ModelType::InstructionTuned,
    "digitous/Janin-GPTJ" => ModelType::FineTuned,
    "digitous/Janin-R" => ModelType::FineTuned,
    "digitous/Javelin-GPTJ" => ModelType::FineTuned,
    "SaylorTwift/gpt2_test" => ModelType::Pretrained,
    "anton-l/gpt-j-tiny-random" => ModelType::FineTuned,
    "Andron00e/YetAnother_Open-Llama-3B-LoRA-OpenOrca" => ModelType::FineTuned,
    "Lazycuber/pyg-instruct-wizardlm" => ModelType::FineTuned,
    "Lazycuber/Janemalion-6B" => ModelType::FineTuned,
    "IDEA-CCNL/Ziya-LLaMA-13B-Pretrain-v1" => ModelType::FineTuned,
    "IDEA-CCNL/Ziya-LLaMA-13B-v1" => ModelType::InstructionTuned,
    "dsvv-cair/alpaca-cleaned-llama-30b-bf16" => ModelType::FineTuned,
    "gpt2-medium" => ModelType::Pretrained,
    "camel-ai/CAMEL-13B-Combined-Data" => ModelType::InstructionTuned,
    "camel-ai/CAMEL-13B-Role-Playing-Data" => ModelType::FineTuned,
    "camel-ai/CAMEL-33B-Combined-Data" => ModelType::InstructionTuned,
    "PygmalionAI/pygmalion-6b" => ModelType::FineTuned,
    "PygmalionAI/metharme-1.3b" => ModelType::InstructionTuned,
    "PygmalionAI/pygmalion-1.3b" => ModelType::FineTuned,
    "PygmalionAI/pygmalion-350m" => ModelType::FineTuned,
    "PygmalionAI/pygmalion-2.7b" => ModelType::FineTuned,
    "medalpaca/medalpaca-7b" => ModelType::FineTuned,
    "lilloukas/Platypus-30B" => ModelType::InstructionTuned,
    "lilloukas/GPlatty-30B" => ModelType::FineTuned,
    "mncai/chatdoctor" => ModelType::FineTuned,
    "chaoyi-wu/MedLLaMA_13B" => ModelType::FineTuned,
    "LoupGarou/WizardCoder-Guanaco-15B-V1.0" => ModelType::InstructionTuned,
    "LoupGarou/WizardCoder-Guanaco-15B-V1.1" => ModelType::FineTuned,
    "hakurei/instruct-12b" => ModelType::InstructionTuned,
    "hakurei/lotus-12B" => ModelType::FineTuned,
    "shibing624/chinese-llama-plus-13b-hf" => ModelType::InstructionTuned,
    "shibing624/chinese-alpaca-plus-7b-hf" => ModelType::InstructionTuned,
    "shibing624/chinese-alpaca-plus-13b-hf" => ModelType::InstructionTuned,
    "mosaicml/mpt-7b-instruct" => ModelType::InstructionTuned,
    "mosaicml/mpt-30b-chat" => ModelType::InstructionTuned,
    "mosaicml/mpt-7b-storywriter" => ModelType::FineTuned,
    "mosaicml/mpt-30b-instruct" => ModelType::InstructionTuned,
    "mosaicml/mpt-7b-chat" => ModelType::InstructionTuned,
    "mosaicml/mpt-30b" => ModelType::Pretrained,
    "Corianas/111m" => ModelType::InstructionTuned,
    "Corianas/Quokka_1.3b" => ModelType::InstructionTuned,
    "Corianas/256_5epoch" => ModelType::FineTuned,
    "Corianas/Quokka_256m" => ModelType::InstructionTuned,
    "Corianas/Quokka_590m" => ModelType::InstructionTuned,
    "Corianas/gpt-j-6B-Dolly" => ModelType::FineTuned,
    "Corianas/Quokka_2.7b" => ModelType::InstructionTuned,
    "cyberagent/open-calm-7b" => ModelType::FineTuned,
    "Aspik101/Nous-Hermes-13b-pl-lora_unload" => ModelType::InstructionTuned,
    "THUDM/chatglm2-6b" => ModelType::InstructionTuned,
    "MetaIX/GPT4-X-Alpasta-30b" => ModelType::InstructionTuned,
    "NYTK/PULI-GPTrio" => ModelType::Pretrained,
    "EleutherAI/pythia-1.3b" => ModelType::Pretrained,
    "EleutherAI/pythia-2.8b-deduped" => ModelType::Pretrained,
    "EleutherAI/gpt-neo-125m" => ModelType::Pretrained,
    "EleutherAI/pythia-160m" => ModelType::Pretrained,
    "EleutherAI/gpt-neo-2.7B" => ModelType::Pretrained,
    "EleutherAI/pythia-1b-deduped" => ModelType::Pretrained,
    "EleutherAI/pythia-6.7b" => ModelType::Pretrained,
    "EleutherAI/pythia-70m-deduped" => ModelType::Pretrained,
    "EleutherAI/gpt-neox-20b" => ModelType::Pretrained,
    "EleutherAI/pythia-1.4b-deduped" => ModelType::Pretrained,
    "EleutherAI/pythia-2.7b" => ModelType::Pretrained,
    "EleutherAI/pythia-6.9b-deduped" => ModelType::Pretrained,
    "EleutherAI/pythia-70m" => ModelType::Pretrained,
    "EleutherAI/gpt-j-6b" => ModelType::Pretrained,
    "EleutherAI/pythia-12b-deduped" => ModelType::Pretrained,
    "EleutherAI/gpt-neo-1.3B" => ModelType::Pretrained,
    "EleutherAI/pythia-410m-deduped" => ModelType::Pretrained,
    "EleutherAI/pythia-160m-deduped" => ModelType::Pretrained,
    "EleutherAI/polyglot-ko-12.8b" => ModelType::Pretrained,
    "EleutherAI/pythia-12b" => ModelType::Pretrained,
    "roneneldan/TinyStories-33M" => ModelType::Pretrained,
    "roneneldan/TinyStories-28M" => ModelType::Pretrained,
    "roneneldan/TinyStories-1M" => ModelType::Pretrained,
    "roneneldan/TinyStories-8M" => ModelType::Pretrained,
    "roneneldan/TinyStories-3M" => ModelType::Pretrained,
    "jerryjalapeno/nart-100k-7b" => ModelType::FineTuned,
    "lmsys/vicuna-13b-v1.3" => ModelType::InstructionTuned,
    "lmsys/vicuna-7b-v1.3" => ModelType::InstructionTuned,
    "lmsys/vicuna-13b-v1.1" => ModelType::InstructionTuned,
    "lmsys/vicuna-13b-delta-v1.1" => ModelType::InstructionTuned,
    "lmsys/vicuna-7b-delta-v1.1" => ModelType::InstructionTuned,
    "abhiramtirumala/DialoGPT-sarcastic-medium" => ModelType::FineTuned,
    "haonan-li/bactrian-x-llama-13b-merged" => ModelType::InstructionTuned,
    "Gryphe/MythoLogic-13b" => ModelType::InstructionTuned,
    "Gryphe/MythoBoros-13b" => ModelType::InstructionTuned,
    "pillowtalks-ai/delta13b" => ModelType::FineTuned,
    "wannaphong/openthaigpt-0.1.0-beta-full-model_for_open_llm_leaderboard" => ModelType::FineTuned,
    "bigscience/bloom-7b1" => ModelType::Pretrained,
    "bigcode/tiny_starcoder_py" => ModelType::Pretrained,
    "bigcode/starcoderplus" => ModelType::FineTuned,
    "bigcode/gpt_bigcode-santacoder" => ModelType::Pretrained,
    "bigcode/starcoder" => ModelType::Pretrained,
    "Open-Orca/OpenOrca-Preview1-13B" => ModelType::InstructionTuned,
    "microsoft/DialoGPT-large" => ModelType::FineTuned,
    "microsoft/DialoGPT-small" => ModelType::FineTuned,
    "microsoft/DialoGPT-medium" => ModelType::FineTuned,
    "microsoft/CodeGPT-small-py" => ModelType::FineTuned,
    "Tincando/fiction_story_generator" => ModelType::FineTuned,
    "Pirr/pythia-13b-deduped-green_devil" => ModelType::FineTuned,
    "Aeala/GPT4-x-AlpacaDente2-30b" => ModelType::FineTuned,
    "Aeala/GPT4-x-AlpacaDente-30b" => ModelType::FineTuned,
    "Aeala/GPT4-x-Alpasta-13b" => ModelType::FineTuned,
    "Aeala/VicUnlocked-alpaca-30b" => ModelType::InstructionTuned,
    "Tap-M/Luna-AI-Llama2-Uncensored" => ModelType::FineTuned,
    "illuin/test-custom-llama" => ModelType::FineTuned,
    "dvruette/oasst-llama-13b-2-epochs" => ModelType::FineTuned,
    "dvruette/oasst-gpt-neox-20b-1000-steps" => ModelType::FineTuned,
    "dvruette/llama-13b-pretrained-dropout" => ModelType::Pretrained,
    "dvruette/llama-13b-pretrained" => ModelType::Pretrained,
    "dvruette/llama-13b-pretrained-sft-epoch-1" => ModelType::Pretrained,
    "dvruette/llama-13b-pretrained-sft-do2" => ModelType::Pretrained,
    "dvruette/oasst-gpt-neox-20b-3000-steps" => ModelType::FineTuned,
    "dvruette/oasst-pythia-12b-pretrained-sft" => ModelType::Pretrained,
    "dvruette/oasst-pythia-6.9b-4000-steps" => ModelType::FineTuned,
    "dvruette/gpt-neox-20b-full-precision" => ModelType::FineTuned,
    "dvruette/oasst-llama-13b-1000-steps" => ModelType::FineTuned,
    "openlm-research/open_llama_7b_700bt_preview" => ModelType::Pretrained,
    "openlm-research/open_llama_7b" => ModelType::Pretrained,
    "openlm-research/open_llama_7b_v2" => ModelType::Pretrained,
    "openlm-research/open_llama_3b" => ModelType::Pretrained,
    "openlm-research/open_llama_13b" => ModelType::Pretrained,
    "openlm-research/open_llama_3b_v2" => ModelType::Pretrained,
    "PocketDoc/Dans-PileOfSets-Mk1-llama-13b-merged" => ModelType::InstructionTuned,
    "GeorgiaTechResearchInstitute/galpaca-30b" => ModelType::InstructionTuned,
    "GeorgiaTechResearchInstitute/starcoder-gpteacher-code-instruct" => ModelType::InstructionTuned,
    "databricks/dolly-v2-7b" => ModelType::InstructionTuned,
    "databricks/dolly-v2-3b" => ModelType::InstructionTuned,
    "databricks/dolly-v2-12b" => ModelType::InstructionTuned,
    "Rachneet/gpt2-xl-alpaca" => ModelType::FineTuned,
    "Locutusque/gpt2-conversational-or-qa" => ModelType::FineTuned,
    "psyche/kogpt" => ModelType::FineTuned,
    "NbAiLab/nb-gpt-j-6B-alpaca" => ModelType::InstructionTuned,
    "Mikael110/llama-2-7b-guanaco-fp16" => ModelType::FineTuned,
    "Mikael110/llama-2-13b-guanaco-fp16" => ModelType::FineTuned,
    "Fredithefish/CrimsonPajama" => ModelType::InstructionTuned,
    "Fredithefish/RedPajama-INCITE-Chat-3B-ShareGPT-11K" => ModelType::FineTuned,
    "Fredithefish/ScarletPajama-3B-HF" => ModelType::FineTuned,
    "Fredithefish/RedPajama-INCITE-Chat-3B-Instruction-Tuning-with-GPT-4" => ModelType::InstructionTuned,
    "acrastt/RedPajama-INCITE-Chat-Instruct-3B-V1" => ModelType::InstructionTuned,
    "eachadea/vicuna-13b-1.1" => ModelType::FineTuned,
    "eachadea/vicuna-7b-1.1" => ModelType::FineTuned,
    "eachadea/vicuna-13b" => ModelType::FineTuned,
    "openaccess-ai-collective/wizard-mega-13b" => ModelType::InstructionTuned,
    "openaccess-ai-collective/manticore-13b" => ModelType::InstructionTuned,
    "openaccess-ai-collective/manticore-30b-chat-pyg-alpha" => ModelType::InstructionTuned,
    "openaccess-ai-collective/minotaur-13b" => ModelType::InstructionTuned,
    "openaccess-ai-collective/minotaur-13b-fixed" => ModelType::InstructionTuned,
    "openaccess-ai-collective/hippogriff-30b-chat" => ModelType::InstructionTuned,
    "openaccess-ai-collective/manticore-13b-chat-pyg" => ModelType::InstructionTuned,
    "pythainlp/wangchanglm-7.5B-sft-enth" => ModelType::InstructionTuned,
    "pythainlp/wangchanglm-7.5B-sft-en-sharded" => ModelType::InstructionTuned,
    "euclaise/gpt-neox-122m-minipile-digits" => ModelType::FineTuned,
    "stabilityai/StableBeluga1-Delta" => ModelType::InstructionTuned,
    "stabilityai/stablelm-tuned-alpha-7b" => ModelType::InstructionTuned,
    "stabilityai/StableBeluga2" => ModelType::InstructionTuned,
    "stabilityai/StableBeluga-13B" => ModelType::InstructionTuned,
    "stabilityai/StableBeluga-7B" => ModelType::InstructionTuned,
    "stabilityai/stablelm-base-alpha-7b" => ModelType::Pretrained,
    "stabilityai/stablelm-base-alpha-3b" => ModelType::Pretrained,
    "stabilityai/stablelm-tuned-alpha-3b" => ModelType::InstructionTuned,
    "alibidaran/medical_transcription_generator" => ModelType::FineTuned,
    "CalderaAI/30B-Lazarus" => ModelType::InstructionTuned,
    "CalderaAI/13B-BlueMethod" => ModelType::InstructionTuned,
    "CalderaAI/13B-Ouroboros" => ModelType::InstructionTuned,
    "KoboldAI/OPT-13B-Erebus" => ModelType::FineTuned,
    "KoboldAI/GPT-J-6B-Janeway" => ModelType::FineTuned,
    "KoboldAI/GPT-J-6B-Shinen" => ModelType::FineTuned,
    "KoboldAI/fairseq-dense-2.7B" => ModelType::Pretrained,
    "KoboldAI/OPT-6B-nerys-v2" => ModelType::FineTuned,
    "KoboldAI/GPT-NeoX-20B-Skein" => ModelType::FineTuned,
    "KoboldAI/PPO_Pygway-6b-Mix" => ModelType::FineTuned,
    "KoboldAI/fairseq-dense-6.7B" => ModelType::Pretrained,
    "KoboldAI/fairseq-dense-125M" => ModelType::Pretrained,
    "KoboldAI/OPT-13B-Nerybus-Mix" => ModelType::FineTuned,
    "KoboldAI/OPT-2.7B-Erebus" => ModelType::FineTuned,
    "KoboldAI/OPT-350M-Nerys-v2" => ModelType::FineTuned,
    "KoboldAI/OPT-2.7B-Nerys-v2" => ModelType::FineTuned,
    "KoboldAI/OPT-2.7B-Nerybus-Mix" => ModelType::FineTuned,
    "KoboldAI/OPT-13B-Nerys-v2" => ModelType::FineTuned,
    "KoboldAI/GPT-NeoX-20B-Erebus" => ModelType::FineTuned,
    "KoboldAI/OPT-6.7B-Erebus" => ModelType::FineTuned,
    "KoboldAI/fairseq-dense-355M" => ModelType::Pretrained,
    "KoboldAI/OPT-6.7B-Nerybus-Mix" => ModelType::FineTuned,
    "KoboldAI/GPT-J-6B-Adventure" => ModelType::FineTuned,
    "KoboldAI/OPT-350M-Erebus" => ModelType::FineTuned,
    "KoboldAI/GPT-J-6B-Skein" => ModelType::FineTuned,
    "KoboldAI/OPT-30B-Erebus" => ModelType::FineTuned,
    "klosax/pythia-160m-deduped-step92k-193bt" => ModelType::Pretrained,
    "klosax/open_llama_3b_350bt_preview" => ModelType::Pretrained,
    "klosax/openllama-3b-350bt" => ModelType::Pretrained,
    "klosax/pythia-70m-deduped-step44k-92bt" => ModelType::Pretrained,
    "klosax/open_llama_13b_600bt_preview" => ModelType::Pretrained,
    "klosax/open_llama_7b_400bt_preview" => ModelType::Pretrained,
    "kfkas/Llama-2-ko-7b-Chat" => ModelType::InstructionTuned,
    "WeOpenML/Alpaca-7B-v1" => ModelType::InstructionTuned,
    "WeOpenML/PandaLM-Alpaca-7B-v1" => ModelType::InstructionTuned,
    "TFLai/gpt2-turkish-uncased" => ModelType::FineTuned,
    "ehartford/WizardLM-13B-Uncensored" => ModelType::InstructionTuned,
    "ehartford/dolphin-llama-13b" => ModelType::InstructionTuned,
    "ehartford/Wizard-Vicuna-30B-Uncensored" => ModelType::FineTuned,
    "ehartford/WizardLM-30B-Uncensored" => ModelType::InstructionTuned,
    "ehartford/Wizard-Vicuna-13B-Uncensored" => ModelType::FineTuned,
    "ehartford/WizardLM-7B-Uncensored" => ModelType::InstructionTuned,
    "ehartford/based-30b" => ModelType::FineTuned,
    "ehartford/Wizard-Vicuna-7B-Uncensored" => ModelType::FineTuned,
    "wahaha1987/llama_7b_sharegpt94k_fastchat" => ModelType::FineTuned,
    "wahaha1987/llama_13b_sharegpt94k_fastchat" => ModelType::FineTuned,
    "OpenAssistant/oasst-sft-1-pythia-12b" => ModelType::FineTuned,
    "OpenAssistant/stablelm-7b-sft-v7-epoch-3" => ModelType::InstructionTuned,
    "OpenAssistant/oasst-sft-4-pythia-12b-epoch-3.5" => ModelType::FineTuned,
    "OpenAssistant/pythia-12b-sft-v8-2.5k-steps" => ModelType::InstructionTuned,
    "OpenAssistant/pythia-12b-sft-v8-7k-steps" => ModelType::InstructionTuned,
    "OpenAssistant/pythia-12b-pre-v8-12.5k-steps" => ModelType::InstructionTuned,
    "OpenAssistant/llama2-13b-orca-8k-3319" => ModelType::InstructionTuned,
    "junelee/wizard-vicuna-13b" => ModelType::FineTuned,
    "BreadAi/gpt-YA-1-1_160M" => ModelType::Pretrained,
    "BreadAi/MuseCan" => ModelType::Pretrained,
    "BreadAi/MusePy-1-2" => ModelType::Pretrained,
    "BreadAi/DiscordPy" => ModelType::Pretrained,
    "BreadAi/PM_modelV2" => ModelType::Pretrained,
    "BreadAi/gpt-Youtube" => ModelType::Pretrained,
    "BreadAi/StoryPy" => ModelType::FineTuned,
    "julianweng/Llama-2-7b-chat-orcah" => ModelType::FineTuned,
    "AGI-inc/lora_moe_7b_baseline" => ModelType::FineTuned,
    "AGI-inc/lora_moe_7b" => ModelType::FineTuned,
    "togethercomputer/GPT-NeoXT-Chat-Base-20B" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-Chat-7B-v0.1" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-Instruct-7B-v0.1" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-7B-Base" => ModelType::Pretrained,
    "togethercomputer/RedPajama-INCITE-7B-Instruct" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-Base-3B-v1" => ModelType::Pretrained,
    "togethercomputer/Pythia-Chat-Base-7B" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-Base-7B-v0.1" => ModelType::Pretrained,
    "togethercomputer/GPT-JT-6B-v1" => ModelType::InstructionTuned,
    "togethercomputer/GPT-JT-6B-v0" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-Chat-3B-v1" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-7B-Chat" => ModelType::InstructionTuned,
    "togethercomputer/RedPajama-INCITE-Instruct-3B-v1" => ModelType::InstructionTuned,
    "Writer/camel-5b-hf" => ModelType::InstructionTuned,
    "Writer/palmyra-base" => ModelType::Pretrained,
    "MBZUAI/LaMini-GPT-1.5B" => ModelType::InstructionTuned,
    "MBZUAI/lamini-cerebras-111m" => ModelType::InstructionTuned,
    "MBZUAI/lamini-neo-1.3b" => ModelType::InstructionTuned,
    "MBZUAI/lamini-cerebras-1.3b" => ModelType::InstructionTuned,
    "MBZUAI/lamini-cerebras-256m" => ModelType::InstructionTuned,
    "MBZUAI/LaMini-GPT-124M" => ModelType::InstructionTuned,
    "MBZUAI/lamini-neo-125m" => ModelType::InstructionTuned,
    "TehVenom/DiffMerge-DollyGPT-Pygmalion" => ModelType::FineTuned,
    "TehVenom/PPO_Shygmalion-6b" => ModelType::FineTuned,
    "TehVenom/Dolly_Shygmalion-6b-Dev_V8P2" => ModelType::FineTuned,
    "TehVenom/Pygmalion_AlpacaLora-7b" => ModelType::FineTuned,
    "TehVenom/PPO_Pygway-V8p4_Dev-6b" => ModelType::FineTuned,
    "TehVenom/Dolly_Malion-6b" => ModelType::FineTuned,
    "TehVenom/PPO_Shygmalion-V8p4_Dev-6b" => ModelType::FineTuned,
    "TehVenom/ChanMalion" => ModelType::FineTuned,
    "TehVenom/GPT-J-Pyg_PPO-6B" => ModelType::InstructionTuned,
    "TehVenom/Pygmalion-13b-Merged" => ModelType::FineTuned,
    "TehVenom/Metharme-13b-Merged" => ModelType::InstructionTuned,
    "TehVenom/Dolly_Shygmalion-6b" => ModelType::FineTuned,
    "TehVenom/GPT-J-Pyg_PPO-6B-Dev-V8p4" => ModelType::InstructionTuned,
    "georgesung/llama2_7b_chat_uncensored" => ModelType::FineTuned,
    "vicgalle/gpt2-alpaca" => ModelType::InstructionTuned,
    "vicgalle/alpaca-7b" => ModelType::FineTuned,
    "vicgalle/gpt2-alpaca-gpt4" => ModelType::InstructionTuned,
    "facebook/opt-350m" => ModelType::Pretrained,
    "facebook/opt-125m" => ModelType::Pretrained,
    "facebook/xglm-4.5B" => ModelType::Pretrained,
    "facebook/opt-2.7b" => ModelType::Pretrained,
    "facebook/opt-6.7b" => ModelType::Pretrained,
    "facebook/galactica-30b" => ModelType::Pretrained,
    "facebook/opt-13b" => ModelType::Pretrained,
    "facebook/opt-66b" => ModelType::Pretrained,
    "facebook/xglm-7.5B" => ModelType::Pretrained,
    "facebook/xglm-564M" => ModelType::Pretrained,
    "facebook/opt-30b" => ModelType::Pretrained,
    "golaxy/gogpt-7b" => ModelType::FineTuned,
    "golaxy/gogpt2-7b" => ModelType::FineTuned,
    "golaxy/gogpt-7b-bloom" => ModelType::FineTuned,
    "golaxy/gogpt-3b-bloom" => ModelType::FineTuned,
    "psmathur/orca_mini_v2_7b" => ModelType::InstructionTuned,
    "psmathur/orca_mini_7b" => ModelType::InstructionTuned,
    "psmathur/orca_mini_3b" => ModelType::InstructionTuned,
    "psmathur/orca_mini_v2_13b" => ModelType::InstructionTuned,
    "gpt2-xl" => ModelType::Pretrained,
    "lxe/Cerebras-GPT-2.7B-Alpaca-SP" => ModelType::FineTuned,
    "Monero/Manticore-13b-Chat-Pyg-Guanaco" => ModelType::FineTuned,
    "Monero/WizardLM-Uncensored-SuperCOT-StoryTelling-30b" => ModelType::InstructionTuned,
    "Monero/WizardLM-13b-OpenAssistant-Uncensored" => ModelType::InstructionTuned,
    "Monero/WizardLM-30B-Uncensored-Guanaco-SuperCOT-30b" => ModelType::InstructionTuned,
    "jzjiao/opt-1.3b-rlhf" => ModelType::FineTuned,
    "HuggingFaceH4/starchat-beta" => ModelType::InstructionTuned,
    "KnutJaegersberg/gpt-2-xl-EvolInstruct" => ModelType::InstructionTuned,
    "KnutJaegersberg/megatron-GPT-2-345m-EvolInstruct" => ModelType::InstructionTuned,
    "KnutJaegersberg/galactica-orca-wizardlm-1.3b" => ModelType::InstructionTuned,
    "openchat/openchat_8192" => ModelType::InstructionTuned,
    "openchat/openchat_v2" => ModelType::InstructionTuned,
    "openchat/openchat_v2_w" => ModelType::InstructionTuned,
    "ausboss/llama-13b-supercot" => ModelType::InstructionTuned,
    "ausboss/llama-30b-supercot" => ModelType::InstructionTuned,
    "Neko-Institute-of-Science/metharme-7b" => ModelType::InstructionTuned,
    "Neko-Institute-of-Science/pygmalion-7b" => ModelType::FineTuned,
    "SebastianSchramm/Cerebras-GPT-111M-instruction" => ModelType::InstructionTuned,
    "victor123/WizardLM-13B-1.0" => ModelType::InstructionTuned,
    "OpenBuddy/openbuddy-openllama-13b-v7-fp16" => ModelType::FineTuned,
    "OpenBuddy/openbuddy-llama2-13b-v8.1-fp16" => ModelType::FineTuned,
    "OpenBuddyEA/openbuddy-llama-30b-v7.1-bf16" => ModelType::FineTuned,
    "baichuan-inc/Baichuan-7B" => ModelType::Pretrained,
    "tiiuae/falcon-40b-instruct" => ModelType::InstructionTuned,
    "tiiuae/falcon-40b" => ModelType::Pretrained,
    "tiiuae/falcon-7b" => ModelType::Pretrained,
    "YeungNLP/firefly-llama-13b" => ModelType::FineTuned,
    "YeungNLP/firefly-llama-13b-v1.2" => ModelType::FineTuned,
    "YeungNLP/firefly-llama2-13b" => ModelType::FineTuned,
    "YeungNLP/firefly-ziya-13b" => ModelType::FineTuned,
    "shaohang/Sparse0.5_OPT-1.3" => ModelType::FineTuned,
    "xzuyn/Alpacino-SuperCOT-13B" => ModelType::InstructionTuned,
    "xzuyn/MedicWizard-7B" => ModelType::FineTuned,
    "xDAN-AI/xDAN_13b_l2_lora" => ModelType::FineTuned,
    "beomi/KoAlpaca-Polyglot-5.8B" => ModelType::FineTuned,
    "beomi/llama-2-ko-7b" => ModelType::InstructionTuned,
    "Salesforce/codegen-6B-multi" => ModelType::Pretrained,
    "Salesforce/codegen-16B-nl" => ModelType::Pretrained,
    "Salesforce/codegen-6B-nl" => ModelType::Pretrained,
    "ai-forever/rugpt3large_based_on_gpt2" => ModelType::FineTuned,
    "gpt2-large" => ModelType::Pretrained,
    "frank098/orca_mini_3b_juniper" => ModelType::FineTuned,
    "frank098/WizardLM_13B_juniper" => ModelType::FineTuned,
    "FPHam/Free_Sydney_13b_HF" => ModelType::FineTuned,
    "huggingface/llama-13b" => ModelType::Pretrained,
    "huggingface/llama-7b" => ModelType::Pretrained,
    "huggingface/llama-65b" => ModelType::Pretrained,
    "huggingface/llama-30b" => ModelType::Pretrained,
    "Henk717/chronoboros-33B" => ModelType::InstructionTuned,
    "jondurbin/airoboros-13b-gpt4-1.4" => ModelType::InstructionTuned,
    "jondurbin/airoboros-7b" => ModelType::InstructionTuned,
    "jondurbin/airoboros-7b-gpt4" => ModelType::InstructionTuned,
    "jondurbin/airoboros-7b-gpt4-1.1" => ModelType::InstructionTuned,
    "jondurbin/airoboros-7b-gpt4-1.2" => ModelType::InstructionTuned,
    "jondurbin/airoboros-7b-gpt4-1.3" => ModelType::InstructionTuned,
    "jondurbin/airoboros-7b-gpt4-1.4" => ModelType::InstructionTuned,
    "jondurbin/airoboros-l2-7b-gpt4-1.4.1" => ModelType::InstructionTuned,
    "jondurbin/airoboros-l2-13b-gpt4-1.4.1" => ModelType::InstructionTuned,
    "jondurbin/airoboros-l2-70b-gpt4-1.4.1" => ModelType::InstructionTuned,
    "jondurbin/airoboros-13b" => ModelType::InstructionTuned,
    "jondurbin/airoboros-33b-gpt4-1.4" => ModelType::InstructionTuned,
    "jondurbin/airoboros-33b-gpt4-1.2" => ModelType::InstructionTuned,
    "jondurbin/airoboros-65b-gpt4-1.2" => ModelType::InstructionTuned,
    "ariellee/SuperPlatty-30B" => ModelType::InstructionTuned,
    "danielhanchen/open_llama_3b_600bt_preview" => ModelType::FineTuned,
    "cerebras/Cerebras-GPT-256M" => ModelType::Pretrained,
    "cerebras/Cerebras-GPT-1.3B" => ModelType::Pretrained,
    "cerebras/Cerebras-GPT-13B" => ModelType::Pretrained,
    "cerebras/Cerebras-GPT-2.7B" => ModelType::Pretrained,
    "cerebras/Cerebras-GPT-111M" => ModelType::Pretrained,
    "cerebras/Cerebras-GPT-6.7B" => ModelType::Pretrained,
    "Yhyu13/oasst-rlhf-2-llama-30b-7k-steps-hf" => ModelType::RlTuned,
    "Yhyu13/llama-30B-hf-openassitant" => ModelType::FineTuned,
    "NousResearch/Nous-Hermes-Llama2-13b" => ModelType::InstructionTuned,
    "NousResearch/Nous-Hermes-llama-2-7b" => ModelType::InstructionTuned,
    "NousResearch/Redmond-Puffin-13B" => ModelType::InstructionTuned,
    "NousResearch/Nous-Hermes-13b" => ModelType::InstructionTuned,
    "project-baize/baize-v2-7b" => ModelType::InstructionTuned,
    "project-baize/baize-v2-13b" => ModelType::InstructionTuned,
    "LLMs/WizardLM-13B-V1.0" => ModelType::FineTuned,
    "LLMs/AlpacaGPT4-7B-elina" => ModelType::FineTuned,
    "wenge-research/yayi-7b" => ModelType::FineTuned,
    "wenge-research/yayi-7b-llama2" => ModelType::FineTuned,
    "wenge-research/yayi-13b-llama2" => ModelType::FineTuned,
    "yhyhy3/open_llama_7b_v2_med_instruct" => ModelType::InstructionTuned,
    "llama-anon/instruct-13b" => ModelType::InstructionTuned,
    "huggingtweets/jerma985" => ModelType::FineTuned,
    "huggingtweets/gladosystem" => ModelType::FineTuned,
    "huggingtweets/bladeecity-jerma985" => ModelType::FineTuned,
    "huggyllama/llama-13b" => ModelType::Pretrained,
    "huggyllama/llama-65b" => ModelType::Pretrained,
    "FabbriSimo01/Facebook_opt_1.3b_Quantized" => ModelType::Pretrained,
    "upstage/Llama-2-70b-instruct" => ModelType::InstructionTuned,
    "upstage/Llama-2-70b-instruct-1024" => ModelType::InstructionTuned,
    "upstage/llama-65b-instruct" => ModelType::InstructionTuned,
    "upstage/llama-30b-instruct-2048" => ModelType::InstructionTuned,
    "upstage/llama-30b-instruct" => ModelType::InstructionTuned,
    "WizardLM/WizardLM-13B-1.0" => ModelType::InstructionTuned,
    "WizardLM/WizardLM-13B-V1.1" => ModelType::InstructionTuned,
    "WizardLM/WizardLM-13B-V1.2" => ModelType::InstructionTuned,
    "WizardLM/WizardLM-30B-V1.0" => ModelType::InstructionTuned,
    "WizardLM/WizardCoder-15B-V1.0" => ModelType::InstructionTuned,
    "gpt2" => ModelType::Pretrained,
    "keyfan/vicuna-chinese-replication-v1.1" => ModelType::InstructionTuned,
    "nthngdy/pythia-owt2-70m-100k" => ModelType::FineTuned,
    "nthngdy/pythia-owt2-70m-50k" => ModelType::FineTuned,
    "quantumaikr/KoreanLM-hf" => ModelType::FineTuned,
    "quantumaikr/open_llama_7b_hf" => ModelType::FineTuned,
    "quantumaikr/QuantumLM-70B-hf" => ModelType::InstructionTuned,
    "MayaPH/FinOPT-Lincoln" => ModelType::FineTuned,
    "MayaPH/FinOPT-Franklin" => ModelType::FineTuned,
    "MayaPH/GodziLLa-30B" => ModelType::InstructionTuned,
    "MayaPH/GodziLLa-30B-plus" => ModelType::InstructionTuned,
    "MayaPH/FinOPT-Washington" => ModelType::FineTuned,
    "ogimgio/gpt-neo-125m-neurallinguisticpioneers" => ModelType::FineTuned,
    "layoric/llama-2-13b-code-alpaca" => ModelType::FineTuned,
    "CobraMamba/mamba-gpt-3b" => ModelType::FineTuned,
    "CobraMamba/mamba-gpt-3b-v2" => ModelType::FineTuned,
    "CobraMamba/mamba-gpt-3b-v3" => ModelType::FineTuned,
    "timdettmers/guanaco-33b-merged" => ModelType::FineTuned,
    "elinas/chronos-33b" => ModelType::InstructionTuned,
    "heegyu/RedTulu-Uncensored-3B-0719" => ModelType::InstructionTuned,
    "heegyu/WizardVicuna-Uncensored-3B-0719" => ModelType::InstructionTuned,
    "heegyu/WizardVicuna-3B-0719" => ModelType::InstructionTuned,
    "meta-llama/Llama-2-7b-chat-hf" => ModelType::RlTuned,
    "meta-llama/Llama-2-7b-hf" => ModelType::Pretrained,
    "meta-llama/Llama-2-13b-chat-hf" => ModelType::RlTuned,
    "meta-llama/Llama-2-13b-hf" => ModelType::Pretrained,
    "meta-llama/Llama-2-70b-chat-hf" => ModelType::RlTuned,
    "meta-llama/Llama-2-70b-hf" => ModelType::Pretrained,
    "xhyi/PT_GPTNEO350_ATG" => ModelType::FineTuned,
    "h2oai/h2ogpt-gm-oasst1-en-1024-20b" => ModelType::FineTuned,
    "h2oai/h2ogpt-gm-oasst1-en-1024-open-llama-7b-preview-400bt" => ModelType::FineTuned,
    "h2oai/h2ogpt-oig-oasst1-512-6_9b" => ModelType::InstructionTuned,
    "h2oai/h2ogpt-oasst1-512-12b" => ModelType::InstructionTuned,
    "h2oai/h2ogpt-oig-oasst1-256-6_9b" => ModelType::InstructionTuned,
    "h2oai/h2ogpt-gm-oasst1-en-2048-open-llama-7b-preview-300bt" => ModelType::FineTuned,
    "h2oai/h2ogpt-oasst1-512-20b" => ModelType::InstructionTuned,
    "h2oai/h2ogpt-gm-oasst1-en-2048-open-llama-7b-preview-300bt-v2" => ModelType::FineTuned,
    "h2oai/h2ogpt-gm-oasst1-en-1024-12b" => ModelType::FineTuned,
    "h2oai/h2ogpt-gm-oasst1-multilang-1024-20b" => ModelType::FineTuned,
    "bofenghuang/vigogne-13b-instruct" => ModelType::InstructionTuned,
    "bofenghuang/vigogne-13b-chat" => ModelType::FineTuned,
    "bofenghuang/vigogne-2-7b-instruct" => ModelType::InstructionTuned,
    "bofenghuang/vigogne-7b-instruct" => ModelType::InstructionTuned,
    "bofenghuang/vigogne-7b-chat" => ModelType::FineTuned,
    "Vmware/open-llama-7b-v2-open-instruct" => ModelType::InstructionTuned,
    "VMware/open-llama-0.7T-7B-open-instruct-v1.1" => ModelType::InstructionTuned,
    "ewof/koishi-instruct-3b" => ModelType::InstructionTuned,
    "gywy/llama2-13b-chinese-v1" => ModelType::FineTuned,
    "GOAT-AI/GOAT-7B-Community" => ModelType::FineTuned,
    "psyche/kollama2-7b" => ModelType::FineTuned,
    "TheTravellingEngineer/llama2-7b-hf-guanaco" => ModelType::FineTuned,
    "beaugogh/pythia-1.4b-deduped-sharegpt" => ModelType::FineTuned,
    "augtoma/qCammel-70-x" => ModelType::InstructionTuned,
    "Lajonbot/Llama-2-7b-chat-hf-instruct-pl-lora_unload" => ModelType::InstructionTuned,
    "anhnv125/pygmalion-6b-roleplay" => ModelType::FineTuned,
    "64bits/LexPodLM-13B" => ModelType::FineTuned,
};
